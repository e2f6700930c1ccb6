use leptos::prelude::*;
use leptos::{ev, html::Dialog};

#[component]
pub fn ColumnModal(
    #[prop(into)] on_create: Callback<String>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let value = name.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        on_create.run(value);
        set_name.set(String::new());
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
        <dialog node_ref=dialog_ref class="column-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE COLUMN"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"COLUMN NAME"</label>
                        <input
                            type="text"
                            placeholder="e.g., Review, Testing..."
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=move || name.get()
                            required
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
