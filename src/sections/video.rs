use leptos::prelude::*;

#[component]
pub fn VideoSection() -> impl IntoView {
    view! {
        <section class="section video-section">
            <div class="container narrow">
                <div class="section-header">
                    <h2>"Conoce " <span class="gradient-text">"OXEN"</span></h2>
                    <p>"Sistema integral para la industria textil"</p>
                </div>
                <div class="video-frame">
                    <video autoplay=true muted=true controls=true playsinline=true>
                        <source src="assets/video/oxen-intro.mp4" type="video/mp4" />
                        "Tu navegador no soporta el elemento de video."
                    </video>
                </div>
            </div>
        </section>
    }
}
