use leptos::prelude::*;

#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section class="cta-section">
            <div class="container narrow">
                <h2>"¿Listo para modernizar tu " <span class="accent">"operación textil"</span>"?"</h2>
                <p>
                    "Da el siguiente paso en tu negocio: te asesoramos y creamos un plan de "
                    "implementación pensado para ti."
                </p>
            </div>
        </section>
    }
}
