use chrono::{Datelike, Utc};
use leptos::prelude::*;
use crate::components::{Logo, LogoSize};
use crate::config::{BRAND_NAME, NAV_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand">
                        <Logo size=LogoSize::Small />
                        <span>"Gestión de producción para la industria textil"</span>
                    </div>
                    <nav class="footer-links">
                        {NAV_LINKS.iter().map(|link| view! {
                            <a href=link.href class="footer-link">{link.label}</a>
                        }).collect::<Vec<_>>()}
                    </nav>
                </div>
                <p class="footer-copyright">
                    {format!("© {} {}. Todos los derechos reservados.", year, BRAND_NAME)}
                </p>
            </div>
        </footer>
    }
}
