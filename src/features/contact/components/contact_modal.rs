use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use leptos::task::spawn_local;
use crate::config::{CONTACT_CLOSE_DELAY_MS, SUBMIT_FEEDBACK_DELAY_MS};
use crate::features::contact::{open_whatsapp, ContactForm, TeamSize};

/// Handle to the contact dialog, provided as context so any call-to-action
/// on the page can open it.
#[derive(Clone, Copy)]
pub struct ContactDialog(pub NodeRef<Dialog>);

impl ContactDialog {
    pub fn open(&self) {
        if let Some(dialog) = self.0.get() {
            let _ = dialog.show_modal();
        }
    }

    pub fn close(&self) {
        if let Some(dialog) = self.0.get() {
            dialog.close();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormStage {
    Editing,
    Submitting,
    Sent,
}

#[component]
pub fn ContactModal(dialog: ContactDialog) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (team_size, set_team_size) = signal::<Option<TeamSize>>(None);
    let (message, set_message) = signal(String::new());
    let (stage, set_stage) = signal(FormStage::Editing);
    let (error, set_error) = signal::<Option<String>>(None);

    let reset = move || {
        set_name.set(String::new());
        set_company.set(String::new());
        set_team_size.set(None);
        set_message.set(String::new());
        set_error.set(None);
        set_stage.set(FormStage::Editing);
    };

    let close_modal = move |_| {
        dialog.close();
        reset();
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if stage.get_untracked() != FormStage::Editing {
            return;
        }

        let form = ContactForm {
            name: name.get_untracked(),
            company: company.get_untracked(),
            team_size: team_size.get_untracked(),
            message: message.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_error.set(None);
        set_stage.set(FormStage::Submitting);

        if let Err(e) = open_whatsapp(&request) {
            web_sys::console::error_1(&format!("Failed to open WhatsApp: {}", e).into());
            set_error.set(Some(e.to_string()));
            set_stage.set(FormStage::Editing);
            return;
        }

        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_FEEDBACK_DELAY_MS).await;
            set_stage.set(FormStage::Sent);
            TimeoutFuture::new(CONTACT_CLOSE_DELAY_MS).await;
            dialog.close();
            reset();
        });
    };

    view! {
        <dialog node_ref=dialog.0 class="modal contact-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2 class="gradient-text">"Solicitar cotización"</h2>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                {move || if stage.get() == FormStage::Sent {
                    view! {
                        <div class="contact-sent">
                            <div class="contact-sent-icon">"✓"</div>
                            <h3>"¡Abriendo WhatsApp!"</h3>
                            <p>"Tu conversación está lista para enviar."</p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <form class="contact-form" on:submit=handle_submit>
                            <div class="form-group">
                                <label for="contact-name">"Nombre completo"</label>
                                <input
                                    id="contact-name"
                                    type="text"
                                    placeholder="Tu nombre"
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    prop:value=move || name.get()
                                    required
                                />
                            </div>
                            <div class="form-group">
                                <label for="contact-company">"Empresa"</label>
                                <input
                                    id="contact-company"
                                    type="text"
                                    placeholder="Nombre de la empresa"
                                    on:input=move |ev| set_company.set(event_target_value(&ev))
                                    prop:value=move || company.get()
                                    required
                                />
                            </div>
                            <div class="form-group">
                                <label for="contact-users">"Número de usuarios estimado"</label>
                                <select
                                    id="contact-users"
                                    on:change=move |ev| set_team_size.set(event_target_value(&ev).parse().ok())
                                    prop:value=move || team_size.get().map(TeamSize::value).unwrap_or("")
                                    required
                                >
                                    <option value="" disabled=true>"Selecciona"</option>
                                    {TeamSize::all().into_iter().map(|size| view! {
                                        <option value=size.value()>{size.label()}</option>
                                    }).collect::<Vec<_>>()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="contact-message">"Comentarios"</label>
                                <textarea
                                    id="contact-message"
                                    rows="3"
                                    placeholder="Cuéntanos qué necesitas implementar"
                                    on:input=move |ev| set_message.set(event_target_value(&ev))
                                    prop:value=move || message.get()
                                ></textarea>
                            </div>
                            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                            <div class="modal-actions">
                                <button type="button" class="btn-secondary" on:click=close_modal>"Cancelar"</button>
                                <button
                                    type="submit"
                                    class="btn-whatsapp"
                                    disabled=move || stage.get() == FormStage::Submitting
                                >
                                    {move || if stage.get() == FormStage::Submitting { "Preparando..." } else { "Enviar por WhatsApp" }}
                                </button>
                            </div>
                        </form>
                    }.into_any()
                }}
            </div>
        </dialog>
    }
}
