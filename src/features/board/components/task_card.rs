use leptos::prelude::*;
use web_sys::DragEvent;

use crate::core::models::Task;

use super::dnd::{use_drag_state, DragPayload};

#[component]
pub fn TaskCard(task: Task, #[prop(into)] on_select: Callback<Task>) -> impl IntoView {
    let drag = use_drag_state();
    let payload = DragPayload {
        task_id: task.id,
        source_column_id: task.status_id,
    };
    let task_for_click = task.clone();

    let on_dragstart = move |ev: DragEvent| {
        // Firefox refuses to start a drag without DataTransfer data; the
        // real payload travels through the drag state signal.
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &payload.task_id.to_string());
        }
        drag.dragging.set(Some(payload));
    };

    let assignee = task
        .assigned_user_name
        .clone()
        .unwrap_or_else(|| "Unassigned".to_string());

    view! {
        <div
            class="task-card clickable"
            class:dragging=move || drag.dragging.get() == Some(payload)
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=move |_| drag.dragging.set(None)
            on:click=move |_| on_select.run(task_for_click.clone())
        >
            <h4>{task.title.clone()}</h4>
            <p>{task.description.clone()}</p>
            <div class="task-assignee" class:unassigned=task.assigned_user_name.is_none()>
                "👤 " {assignee}
            </div>
            <div class="task-meta">
                <span class="comment-hint">"💬 Comments"</span>
            </div>
        </div>
    }
}
