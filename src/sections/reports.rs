use leptos::prelude::*;

struct Report {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
    metrics: [&'static str; 3],
}

const REPORTS: [Report; 3] = [
    Report {
        icon: "🏭",
        title: "Producción",
        description: "Avance por orden, eficiencia por línea y cumplimiento de entregas.",
        color: "#3498db",
        metrics: ["Órdenes activas", "Eficiencia", "Tiempos"],
    },
    Report {
        icon: "📦",
        title: "Inventarios",
        description: "Rotación de insumos, stock crítico y movimientos en tiempo real.",
        color: "#27ae60",
        metrics: ["Stock actual", "Rotación", "Alertas"],
    },
    Report {
        icon: "🛒",
        title: "Ventas",
        description: "Análisis de referencias, puntos de venta y comportamiento de clientes.",
        color: "#f39c12",
        metrics: ["Ventas diarias", "Top productos", "Tendencias"],
    },
];

#[component]
pub fn ReportsSection() -> impl IntoView {
    view! {
        <section id="reportes" class="section section-muted reports-section">
            <div class="container">
                <div class="section-header">
                    <span class="badge badge-orange">"📊 Reportes"</span>
                    <h2>"Reportes que hablan tu " <span class="gradient-text">"lenguaje"</span></h2>
                    <p>"Visualiza producción, ventas e inventarios para decidir más rápido."</p>
                </div>
                <div class="card-grid three">
                    {REPORTS.iter().map(|report| view! {
                        <article class="report-card" style=format!("--accent: {};", report.color)>
                            <div class="module-icon">{report.icon}</div>
                            <h3>{report.title}</h3>
                            <p>{report.description}</p>
                            <div class="metric-chips">
                                {report.metrics.iter().map(|metric| view! {
                                    <span class="metric-chip">{*metric}</span>
                                }).collect::<Vec<_>>()}
                            </div>
                        </article>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
