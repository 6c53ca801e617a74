use leptos::prelude::*;

struct FlowStep {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
}

const STEPS: [FlowStep; 4] = [
    FlowStep { number: "01", title: "Diseño y planeación", description: "Tablas de medida, ficha técnica y estimaciones listas para costeo.", icon: "📏", color: "#9b59b6" },
    FlowStep { number: "02", title: "Corte y ejecución", description: "Órdenes, insumos y avances con control de tiempos.", icon: "✂", color: "#e74c3c" },
    FlowStep { number: "03", title: "Producción y trazabilidad", description: "Rutas operacionales y seguimiento por lote o referencia.", icon: "🏭", color: "#f39c12" },
    FlowStep { number: "04", title: "Inventario y ventas", description: "Producto terminado conectado a POS y reportes finales.", icon: "🛒", color: "#27ae60" },
];

const OPERATIONAL_VIEW: [&str; 6] = [
    "Órdenes en proceso y avance por línea",
    "Tablas de medidas centralizadas",
    "Alertas de insumos críticos",
    "Distribución y entregas trazables",
    "Dashboard en tiempo real",
    "Reportes automáticos",
];

#[component]
pub fn FlowSection() -> impl IntoView {
    view! {
        <section id="flujo" class="section section-muted flow-section">
            <div class="container two-columns">
                <div>
                    <span class="badge badge-green">"Flujo de trabajo"</span>
                    <h2>"Un flujo de trabajo " <span class="gradient-text">"sin saltos"</span></h2>
                    <p class="section-lead">"Conecta los equipos de diseño, corte, producción y comercial en un mismo tablero."</p>
                    <div class="flow-steps">
                        {STEPS.iter().map(|step| view! {
                            <div class="flow-step">
                                <div class="flow-icon" style=format!("background-color: {}26; color: {};", step.color, step.color)>
                                    {step.icon}
                                </div>
                                <div>
                                    <div class="flow-title">
                                        <span class="flow-number" style=format!("color: {};", step.color)>{step.number}</span>
                                        <h4>{step.title}</h4>
                                    </div>
                                    <p>{step.description}</p>
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="dark-panel">
                    <h3>"▤ Vista operativa"</h3>
                    <ul class="dot-list">
                        {OPERATIONAL_VIEW.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
                    </ul>
                    <div class="panel-footer">
                        <div>
                            <small>"Eficiencia promedio"</small>
                            <div class="panel-metric">"94.2%"</div>
                        </div>
                        <svg class="efficiency-ring" viewBox="0 0 96 96">
                            <circle cx="48" cy="48" r="40" fill="none" stroke="rgba(255,255,255,0.1)" stroke-width="8" />
                            <circle
                                cx="48" cy="48" r="40" fill="none" stroke="#27ae60" stroke-width="8"
                                stroke-linecap="round" stroke-dasharray="236 251" transform="rotate(-90 48 48)"
                            />
                        </svg>
                    </div>
                </div>
            </div>
        </section>
    }
}
