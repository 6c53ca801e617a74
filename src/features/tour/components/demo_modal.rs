use leptos::prelude::*;
use leptos::html::Dialog;
use crate::features::tour::{TourState, TOUR_STEPS};

#[component]
pub fn DemoModal(dialog_ref: NodeRef<Dialog>) -> impl IntoView {
    let tour = RwSignal::new(TourState::default());

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="modal demo-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2 class="gradient-text">"Conoce OXEN en 9 pasos"</h2>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <div class="tour-stage">
                    <div class="tour-screen">
                        {move || {
                            let step = tour.with(|t| t.step());
                            view! { <img class="tour-image" src=step.image alt=step.title /> }
                        }}
                    </div>
                    <div class="tour-caption">
                        <h4>{move || tour.with(|t| t.step().title)}</h4>
                        <p>{move || tour.with(|t| t.step().description)}</p>
                    </div>
                </div>
                <div class="tour-progress">
                    {(0..TOUR_STEPS.len()).map(|index| view! {
                        <button
                            type="button"
                            class="tour-segment"
                            class:reached=move || tour.with(|t| t.is_reached(index))
                            title=TOUR_STEPS[index].title
                            on:click=move |_| tour.update(|t| t.go_to(index))
                        ></button>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="tour-nav">
                    <button
                        type="button"
                        class="btn-secondary"
                        disabled=move || tour.with(|t| t.is_first())
                        on:click=move |_| tour.update(|t| t.previous())
                    >"‹ Anterior"</button>
                    <span class="tour-position">{move || tour.with(|t| t.position_label())}</span>
                    <button
                        type="button"
                        class="btn-primary"
                        disabled=move || tour.with(|t| t.is_last())
                        on:click=move |_| tour.update(|t| t.next())
                    >"Siguiente ›"</button>
                </div>
            </div>
        </dialog>
    }
}
