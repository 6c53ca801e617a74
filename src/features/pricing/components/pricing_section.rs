use leptos::prelude::*;
use crate::features::contact::ContactDialog;
use crate::features::pricing::{PlanId, PLANS};

#[component]
pub fn PricingSection() -> impl IntoView {
    let (selected, set_selected) = signal(PlanId::default());
    let contact = use_context::<ContactDialog>();

    view! {
        <section id="cotizacion" class="section pricing-section">
            <div class="container">
                <div class="section-header">
                    <span class="badge badge-green">"💳 Cotización"</span>
                    <h2>"Planes pensados para " <span class="gradient-text">"crecer contigo"</span></h2>
                    <p>
                        "OXEN centraliza inventarios, producción y control operativo en tiempo real. "
                        "El Plan Básico ya entrega estructura completa para operar, y el Profesional desbloquea el control total."
                    </p>
                </div>

                <div class="plan-tabs">
                    {PLANS.iter().map(|plan| {
                        let id = plan.id;
                        view! {
                            <button
                                type="button"
                                class="plan-tab"
                                class:active=move || selected.get() == id
                                on:click=move |_| set_selected.set(id)
                            >{plan.name}</button>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                {move || {
                    let plan = selected.get().plan();
                    let icon_class = match plan.id {
                        PlanId::Basic => "plan-icon plan-icon-basic",
                        PlanId::Pro => "plan-icon plan-icon-pro",
                    };
                    view! {
                        <div class="plan-card" class:popular=plan.popular>
                            {plan.popular.then(|| view! { <div class="plan-ribbon">"Más popular"</div> })}
                            <div class="plan-body">
                                <div class="plan-summary">
                                    <div class=icon_class>{if plan.id == PlanId::Basic { "▤" } else { "✦" }}</div>
                                    <h3>{plan.name}</h3>
                                    <p class="plan-users">{plan.users}</p>
                                    <p class="plan-description">{plan.summary}</p>
                                </div>
                                <div class="plan-features">
                                    <h4>"Características incluidas"</h4>
                                    <div class="feature-grid">
                                        {plan.features().map(|(name, included)| view! {
                                            <div class="plan-feature" class:excluded=!included>
                                                <span class="feature-mark">{if included { "✓" } else { "✕" }}</span>
                                                <span>{name}</span>
                                            </div>
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }}

                <div class="pricing-model">
                    <h4>"Modelo de precios flexible"</h4>
                    <p>"✓ " <strong>"Valor inicial de puesta en marcha:"</strong>
                    " Implementación, instalación, configuración y capacitación (pago único)"</p>
                    <p>"✓ " <strong>"Pago mensual:"</strong>
                    " Según el plan elegido, con acceso a todas las características incluidas"</p>
                    <p class="pricing-note">
                        "Cada negocio es único. Contáctanos para recibir una "
                        <strong>"cotización personalizada"</strong>
                        " basada en tus necesidades específicas."
                    </p>
                    <button
                        type="button"
                        class="btn-whatsapp"
                        on:click=move |_| {
                            if let Some(contact) = contact {
                                contact.open();
                            }
                        }
                    >"Solicitar cotización por WhatsApp"</button>
                </div>
            </div>
        </section>
    }
}
