use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppView;
use crate::features::auth::services as auth;

#[component]
pub fn Register() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match auth::register(&name, &email, &password).await {
                Ok(()) => navigate.set(AppView::Login),
                Err(e) => set_error.set(Some(e.detail)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"TaskHive"</h1>
                <h2>"Create account"</h2>
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"NAME"</label>
                        <input
                            type="text"
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=move || name.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"EMAIL"</label>
                        <input
                            type="email"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=move || email.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"PASSWORD"</label>
                        <input
                            type="password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=move || password.get()
                            required
                        />
                    </div>
                    <button type="submit" class="btn-primary">"REGISTER"</button>
                </form>
                <p class="auth-switch">
                    "Already registered? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        navigate.set(AppView::Login);
                    }>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
