use leptos::prelude::*;
use web_sys::DragEvent;

use crate::core::models::{BoardColumn, MoveRequest, Task};

use super::dnd::use_drag_state;
use super::task_card::TaskCard;

/// One kanban column: header with a task count, cards, and a drop target
/// covering the whole column body.
#[component]
pub fn BoardColumnView(
    column: BoardColumn,
    #[prop(into)] on_drop: Callback<MoveRequest>,
    #[prop(into)] on_select: Callback<Task>,
) -> impl IntoView {
    let drag = use_drag_state();
    let (is_over, set_is_over) = signal(false);
    let column_id = column.status_id;

    let on_dragover = move |ev: DragEvent| {
        // Required, otherwise the browser never fires the drop event.
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_drop_handler = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if let Some(payload) = drag.dragging.get_untracked() {
            drag.dragging.set(None);
            on_drop.run(MoveRequest {
                task_id: payload.task_id,
                source_column_id: payload.source_column_id,
                dest_column_id: column_id,
            });
        }
    };

    view! {
        <div
            class="kanban-column"
            class:drag-over=move || is_over.get()
            on:dragover=on_dragover
            on:dragleave=move |_: DragEvent| set_is_over.set(false)
            on:drop=on_drop_handler
        >
            <div class="column-header">
                <h3>{column.status_name.clone()}</h3>
                <span class="task-count">{column.tasks.len()}</span>
            </div>
            <div class="column-content">
                {column
                    .tasks
                    .iter()
                    .cloned()
                    .map(|task| view! { <TaskCard task=task on_select=on_select /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
