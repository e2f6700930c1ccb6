use leptos::prelude::*;
use leptos::ev;
use leptos::task::spawn_local;

use crate::core::models::{Task, TaskComment};
use crate::features::board::services::board_api::{add_comment, task_comments};

/// Overlay with a task's comment thread. Rendered while a card is
/// selected; fetches the thread on open.
#[component]
pub fn CommentsModal(task: Task, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let (comments, set_comments) = signal(Vec::<TaskComment>::new());
    let (draft, set_draft) = signal(String::new());
    let task_id = task.id;

    let refresh = move || {
        spawn_local(async move {
            match task_comments(task_id).await {
                Ok(list) => set_comments.set(list),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch comments: {}", e).into(),
                    );
                }
            }
        });
    };
    refresh();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        set_draft.set(String::new());
        spawn_local(async move {
            match add_comment(task_id, &text).await {
                Ok(_) => {
                    if let Ok(list) = task_comments(task_id).await {
                        set_comments.set(list);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to add comment: {}", e).into());
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{task.title.clone()}</h3>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <p class="task-description">{task.description.clone()}</p>
                <div class="comments-section">
                    <h4>"Comments"</h4>
                    <div class="comments-list">
                        {move || {
                            comments.with(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="no-comments">
                                            "No comments yet. Be the first to comment!"
                                        </p>
                                    }
                                    .into_any()
                                } else {
                                    list.iter()
                                        .map(|comment| {
                                            view! {
                                                <div class="comment-item">
                                                    <div class="comment-header">
                                                        <span class="comment-author">
                                                            {comment
                                                                .user_name
                                                                .clone()
                                                                .unwrap_or_else(|| "Unknown".to_string())}
                                                        </span>
                                                        <span class="comment-date">{comment.created_on()}</span>
                                                    </div>
                                                    <p class="comment-text">{comment.comment.clone()}</p>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                            })
                        }}
                    </div>
                    <form class="comment-form" on:submit=handle_submit>
                        <textarea
                            placeholder="Add a comment..."
                            rows="3"
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            prop:value=move || draft.get()
                        ></textarea>
                        <button type="submit" class="btn-primary">"ADD COMMENT"</button>
                    </form>
                </div>
            </div>
        </div>
    }
}
