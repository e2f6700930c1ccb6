use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::features::projects::services::ProjectDraft;

#[component]
pub fn ProjectModal(
    #[prop(into)] on_create: Callback<ProjectDraft>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (technology_stack, set_technology_stack) = signal(String::new());
    let (team_size, set_team_size) = signal(String::from("1"));

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        on_create.run(ProjectDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            technology_stack: technology_stack.get_untracked(),
            team_size: team_size.get_untracked().parse().unwrap_or(1),
        });

        set_title.set(String::new());
        set_description.set(String::new());
        set_technology_stack.set(String::new());
        set_team_size.set(String::from("1"));
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
        <dialog node_ref=dialog_ref class="project-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE PROJECT"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="e.g., E-commerce Platform"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Brief description of the project..."
                            rows="3"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"TECHNOLOGY STACK"</label>
                        <input
                            type="text"
                            placeholder="e.g., Rust, Leptos, PostgreSQL"
                            on:input=move |ev| set_technology_stack.set(event_target_value(&ev))
                            prop:value=move || technology_stack.get()
                        />
                    </div>
                    <div class="form-group">
                        <label>"TEAM SIZE"</label>
                        <input
                            type="number"
                            min="1"
                            max="50"
                            on:input=move |ev| set_team_size.set(event_target_value(&ev))
                            prop:value=move || team_size.get()
                        />
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
