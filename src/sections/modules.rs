use leptos::prelude::*;

struct Module {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
    features: [&'static str; 3],
}

const MODULES: [Module; 6] = [
    Module {
        icon: "📦",
        title: "Inventarios conectados",
        description: "Tela, insumos y producto terminado en un solo flujo, con alertas claras.",
        color: "#3498db",
        features: ["Kardex en tiempo real", "Alertas de stock", "Reservas por orden"],
    },
    Module {
        icon: "📏",
        title: "Diseño y ficha técnica",
        description: "Patrones, tablas de medidas y ficha técnica listos para producción.",
        color: "#9b59b6",
        features: ["Fichas técnicas", "Tablas de medida", "Especificaciones"],
    },
    Module {
        icon: "✂",
        title: "Órdenes de corte",
        description: "Planifica, ejecuta y controla cada corte con trazabilidad completa.",
        color: "#e74c3c",
        features: ["Planificación", "Hojas de corte", "Trazabilidad"],
    },
    Module {
        icon: "🏭",
        title: "Piso de producción",
        description: "Seguimiento de órdenes, control de avances y rutas operacionales.",
        color: "#f39c12",
        features: ["Kanban visual", "Control por etapas", "Tiempos reales"],
    },
    Module {
        icon: "📊",
        title: "Reportes inteligentes",
        description: "Producción, inventarios y ventas con indicadores accionables.",
        color: "#27ae60",
        features: ["Dashboards", "Exportación", "Automatización"],
    },
    Module {
        icon: "🛒",
        title: "Punto de venta",
        description: "Ventas y facturación integradas al stock de producto terminado.",
        color: "#1abc9c",
        features: ["Facturación", "Múltiples cajas", "Reportes diarios"],
    },
];

#[component]
pub fn ModulesSection() -> impl IntoView {
    view! {
        <section id="modulos" class="section modules-section">
            <div class="container">
                <div class="section-header">
                    <span class="badge badge-blue">"Funcionalidades"</span>
                    <h2>"Módulos clave para tu " <span class="gradient-text">"operación"</span></h2>
                    <p>"Todo lo que el área de producción necesita para operar en tiempo real."</p>
                </div>
                <div class="card-grid three">
                    {MODULES.iter().map(|module| view! {
                        <ModuleCard module=module />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ModuleCard(module: &'static Module) -> impl IntoView {
    view! {
        <article class="module-card" style=format!("--accent: {};", module.color)>
            <div class="module-stripe"></div>
            <div class="module-icon">{module.icon}</div>
            <h3>{module.title}</h3>
            <p>{module.description}</p>
            <ul class="check-list">
                {module.features.iter().map(|feature| view! {
                    <li><span class="check">"✓"</span>{*feature}</li>
                }).collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
