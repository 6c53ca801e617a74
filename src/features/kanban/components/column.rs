use leptos::ev::DragEvent;
use leptos::prelude::*;
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::state::BoardState;
use crate::models::{CardId, ColumnId};

#[component]
pub fn KanbanColumn(
    column: ColumnId,
    #[prop(into)] board: ReadSignal<BoardState>,
    #[prop(into)] on_begin: Callback<(CardId, ColumnId)>,
    #[prop(into)] on_drop: Callback<String>,
    #[prop(into)] on_end: Callback<()>,
) -> impl IntoView {
    let color = column.color();

    view! {
        <div
            class="kanban-column"
            data-column=column.key()
            style=format!("border-color: {}4d;", color)
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                on_drop.run(column.key().to_string());
            }
        >
            <div class="column-header" style=format!("border-color: {}; background-color: {}14;", color, color)>
                <div class="column-title">
                    <span class="column-dot" style=format!("background-color: {};", color)></span>
                    <h3>{column.label()}</h3>
                </div>
                <span class="task-count">
                    {move || format!("{} tareas", board.with(|b| b.len(column)))}
                </span>
            </div>
            <div class="column-content">
                {move || {
                    let cards = board.with(|b| b.cards(column).to_vec());
                    if cards.is_empty() {
                        view! { <div class="column-empty"><p>"Sin tareas"</p></div> }.into_any()
                    } else {
                        cards.into_iter()
                            .map(|card| view! {
                                <TaskCard card=card column=column on_begin=on_begin on_end=on_end />
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
