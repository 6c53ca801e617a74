use leptos::ev;
use leptos::prelude::*;
use crate::components::{Logo, LogoSize};
use crate::config::{HEADER_SCROLL_THRESHOLD, NAV_LINKS};
use crate::features::contact::ContactDialog;

#[component]
pub fn Nav() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let contact = use_context::<ContactDialog>();

    let _scroll = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(y > HEADER_SCROLL_THRESHOLD);
    });

    let open_contact = move |_| {
        set_menu_open.set(false);
        if let Some(contact) = contact {
            contact.open();
        }
    };

    view! {
        <header class="site-header" class:scrolled=move || scrolled.get()>
            <div class="container header-inner">
                <a href="#" class="brand">
                    <Logo size=LogoSize::Medium />
                    <span class="brand-tagline">"Operación textil conectada"</span>
                </a>

                <nav class="nav-links">
                    {NAV_LINKS.iter().map(|link| view! {
                        <a href=link.href class="nav-link">{link.label}</a>
                    }).collect::<Vec<_>>()}
                </nav>

                <button type="button" class="btn-whatsapp btn-sm nav-cta" on:click=open_contact>"WhatsApp"</button>

                <button
                    type="button"
                    class="menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="mobile-menu">
                    {NAV_LINKS.iter().map(|link| view! {
                        <a href=link.href class="mobile-link" on:click=move |_| set_menu_open.set(false)>
                            {link.label}
                        </a>
                    }).collect::<Vec<_>>()}
                    <button type="button" class="btn-whatsapp" on:click=open_contact>
                        "Solicitar cotización por WhatsApp"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
