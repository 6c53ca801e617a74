use leptos::ev::DragEvent;
use leptos::prelude::*;
use crate::features::kanban::state::PendingMove;
use crate::models::{Card, CardId, ColumnId};

// Draggable card; the drag payload mirrors the pending move held by the board
#[component]
pub fn TaskCard(
    card: Card,
    column: ColumnId,
    #[prop(into)] on_begin: Callback<(CardId, ColumnId)>,
    #[prop(into)] on_end: Callback<()>,
) -> impl IntoView {
    let card_id = card.id;

    let drag_start = move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            let payload = PendingMove { card: card_id, source: column };
            if let Ok(json) = serde_json::to_string(&payload) {
                let _ = transfer.set_data("text/plain", &json);
            }
            transfer.set_effect_allowed("move");
        }
        on_begin.run((card_id, column));
    };

    view! {
        <div
            class="task-card"
            draggable="true"
            data-card=card_id.to_string()
            on:dragstart=drag_start
            on:dragend=move |_| on_end.run(())
        >
            <p class="task-title">{card.title.clone()}</p>
            <span class=format!("priority-badge priority-{}", card.priority.as_str())>
                {card.priority.marker()}
            </span>
        </div>
    }
}
