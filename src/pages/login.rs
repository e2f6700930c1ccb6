use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppView;
use crate::features::auth::services as auth;

#[component]
pub fn Login() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match auth::login(&email, &password).await {
                Ok(()) => navigate.set(AppView::Dashboard),
                Err(e) => {
                    set_error.set(Some(e.detail));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"TaskHive"</h1>
                <h2>"Sign in"</h2>
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"EMAIL"</label>
                        <input
                            type="email"
                            placeholder="you@example.com"
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
                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "SIGNING IN..." } else { "SIGN IN" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "No account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        navigate.set(AppView::Register);
                    }>"Register"</a>
                </p>
            </div>
        </div>
    }
}
