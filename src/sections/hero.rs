use leptos::prelude::*;
use leptos::html::Dialog;
use crate::features::tour::DemoModal;

struct DashboardTile {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
}

const TILES: [DashboardTile; 4] = [
    DashboardTile { title: "Inventario Tela", description: "Entradas y salidas", icon: "📦", color: "#3498db" },
    DashboardTile { title: "Órdenes de Corte", description: "Prioridad y avance", icon: "✂", color: "#e74c3c" },
    DashboardTile { title: "Producción", description: "Control de piso", icon: "🏭", color: "#f39c12" },
    DashboardTile { title: "POS", description: "Ventas y facturación", icon: "🛒", color: "#9b59b6" },
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let demo_ref: NodeRef<Dialog> = NodeRef::new();

    let open_demo = move |_| {
        if let Some(dialog) = demo_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    view! {
        <section class="hero">
            <div class="hero-glow hero-glow-blue"></div>
            <div class="hero-glow hero-glow-green"></div>
            <div class="container hero-grid">
                <div class="hero-copy">
                    <span class="badge badge-blue">"✨ Sistema integral para la industria textil"</span>
                    <h1>"Todo tu negocio en un solo " <span class="gradient-text">"panel de control"</span></h1>
                    <p class="hero-lead">
                        "OXEN centraliza inventarios, diseño, cortes, producción, trazabilidad y ventas "
                        "en una experiencia clara y operativa."
                    </p>
                    <div class="hero-actions">
                        <button type="button" class="btn-primary btn-lg" on:click=open_demo>"▶ Ver vista previa guiada"</button>
                        <a href="#cotizacion" class="btn-outline btn-lg">"Ver planes y precios →"</a>
                    </div>
                    <div class="hero-highlights">
                        <div class="highlight-card">
                            <span class="highlight-title">"🔒 Permisos detallados"</span>
                            <p>"Controla quién ve y edita cada módulo."</p>
                        </div>
                        <div class="highlight-card">
                            <span class="highlight-title">"📈 Trazabilidad viva"</span>
                            <p>"Órdenes, cortes y avances siempre visibles."</p>
                        </div>
                    </div>
                </div>

                <div class="hero-mockup float">
                    <div class="mockup-window">
                        <div class="mockup-bar">
                            <span class="mockup-light red"></span>
                            <span class="mockup-light yellow"></span>
                            <span class="mockup-light green"></span>
                        </div>
                        <div class="mockup-body">
                            <div class="mockup-kpi">
                                <span>"Producción activa"</span>
                                <strong>"68%"</strong>
                            </div>
                            <div class="mockup-tiles">
                                {TILES.iter().map(|tile| view! {
                                    <div class="mockup-tile">
                                        <span class="tile-icon" style=format!("color: {};", tile.color)>{tile.icon}</span>
                                        <div class="tile-title">{tile.title}</div>
                                        <div class="tile-description">{tile.description}</div>
                                    </div>
                                }).collect::<Vec<_>>()}
                            </div>
                            <div class="mockup-progress">
                                <div class="progress-label"><span>"Ruta operacional"</span><strong>"70%"</strong></div>
                                <div class="progress-track"><div class="progress-fill" style="width: 70%;"></div></div>
                            </div>
                        </div>
                    </div>
                    <div class="mockup-chip chip-top">
                        <span class="chip-icon">"✓"</span>
                        <div><small>"Órdenes hoy"</small><strong>"+24"</strong></div>
                    </div>
                    <div class="mockup-chip chip-bottom">
                        <span class="chip-icon">"📈"</span>
                        <div><small>"Eficiencia"</small><strong>"94.2%"</strong></div>
                    </div>
                </div>
            </div>
            <DemoModal dialog_ref=demo_ref />
        </section>
    }
}
