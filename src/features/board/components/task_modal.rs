use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::core::models::{BoardColumn, TeamMember};

/// Form output of the create-task modal. The server assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskDraft {
    pub title: String,
    pub description: String,
    pub status_id: i64,
    pub assigned_to: Option<i64>,
}

#[component]
pub fn TaskModal(
    #[prop(into)] columns: RwSignal<Vec<BoardColumn>>,
    #[prop(into)] members: ReadSignal<Vec<TeamMember>>,
    #[prop(into)] on_create: Callback<NewTaskDraft>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    // Empty string means "first column" / "unassigned" until changed.
    let (status_value, set_status_value) = signal(String::new());
    let (assignee_value, set_assignee_value) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let status_id = status_value
            .get_untracked()
            .parse::<i64>()
            .ok()
            .or_else(|| columns.with_untracked(|cols| cols.first().map(|c| c.status_id)));
        let Some(status_id) = status_id else {
            // No columns yet, nowhere to put the task.
            return;
        };

        on_create.run(NewTaskDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            status_id,
            assigned_to: assignee_value.get_untracked().parse::<i64>().ok(),
        });

        set_title.set(String::new());
        set_description.set(String::new());
        set_assignee_value.set(String::new());
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="Task title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Task description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"COLUMN"</label>
                        <select on:change=move |ev| set_status_value.set(event_target_value(&ev))>
                            {move || {
                                columns.with(|cols| {
                                    cols.iter()
                                        .map(|col| {
                                            view! {
                                                <option value=col.status_id.to_string()>
                                                    {col.status_name.clone()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                            }}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"ASSIGN TO"</label>
                        <select on:change=move |ev| set_assignee_value.set(event_target_value(&ev))>
                            <option value="">"Unassigned"</option>
                            {move || {
                                members.with(|list| {
                                    list.iter()
                                        .map(|member| {
                                            view! {
                                                <option value=member.id.to_string()>
                                                    {format!("{} ({})", member.name, member.email)}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                            }}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
