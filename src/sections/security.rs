use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Access {
    View,
    Edit,
    Admin,
}

impl Access {
    fn label(self) -> &'static str {
        match self {
            Access::View => "Ver",
            Access::Edit => "Editar",
            Access::Admin => "Admin",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Access::View => "access-badge access-view",
            Access::Edit => "access-badge access-edit",
            Access::Admin => "access-badge access-admin",
        }
    }
}

const PERMISSIONS: [(&str, &str, Access); 4] = [
    ("📦", "Inventario Tela", Access::Edit),
    ("🏭", "Producción", Access::View),
    ("🛒", "POS", Access::Edit),
    ("📊", "Reportes", Access::Admin),
];

const ROLE_TAGS: [&str; 4] = ["Admin total", "Solo lectura", "Edición por área", "Perfiles por rol"];

#[component]
pub fn SecuritySection() -> impl IntoView {
    view! {
        <section id="seguridad" class="section security-section">
            <div class="container two-columns">
                <div>
                    <span class="badge badge-red">"🛡 Seguridad"</span>
                    <h2>"Permisos detallados " <span class="gradient-text">"por módulo"</span></h2>
                    <p class="section-lead">
                        "Define quién puede ver, editar o administrar cada parte del sistema. "
                        "OXEN incluye perfiles con control detallado y modo solo lectura para equipos operativos."
                    </p>
                    <div class="tag-row">
                        {ROLE_TAGS.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="dark-panel">
                    <h3>"👥 Usuarios y permisos"</h3>
                    <div class="permission-list">
                        {PERMISSIONS.iter().map(|(icon, module, access)| view! {
                            <div class="permission-row">
                                <div class="permission-module">
                                    <span class="permission-icon">{*icon}</span>
                                    <span>{*module}</span>
                                </div>
                                <span class=access.class()>{access.label()}</span>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                    <div class="panel-footer">
                        <span>"Total de usuarios"</span>
                        <strong>"12 activos"</strong>
                    </div>
                </div>
            </div>
        </section>
    }
}
