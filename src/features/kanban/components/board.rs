use leptos::prelude::*;
use crate::features::kanban::components::KanbanColumn;
use crate::features::kanban::hooks::use_board;
use crate::models::ColumnId;

#[component]
pub fn KanbanSection() -> impl IntoView {
    let hook = use_board();
    let board = hook.board;

    view! {
        <section class="section kanban-section">
            <div class="container">
                <div class="section-header">
                    <span class="badge badge-blue">"Gestión visual"</span>
                    <h2>"Tablero Kanban " <span class="gradient-text">"colaborativo"</span></h2>
                    <p>
                        "Arrastra tareas entre columnas para gestionar el flujo de trabajo. "
                        "Cada orden avanza visualmente a través de las etapas de producción."
                    </p>
                </div>

                <div class="kanban-board" class:dragging=move || board.with(|b| b.is_dragging())>
                    {ColumnId::all().into_iter().map(|column| view! {
                        <KanbanColumn
                            column=column
                            board=board
                            on_begin=hook.begin_move
                            on_drop=hook.complete_move
                            on_end=hook.cancel_move
                        />
                    }).collect::<Vec<_>>()}
                </div>

                <div class="kanban-hint">
                    <p>"💡 " <strong>"Prueba arrastrando tareas"</strong>
                    " entre columnas para ver cómo el sistema visualiza el avance de producción"</p>
                </div>
            </div>
        </section>
    }
}
