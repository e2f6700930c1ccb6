use leptos::prelude::*;

use crate::core::services::session;
use crate::pages::{Board, Dashboard, Login, Register};

/// Which top-level view is currently shown. Stored in a signal and provided
/// through context so any component can navigate.
#[derive(Clone, Debug, PartialEq)]
pub enum AppView {
    Login,
    Register,
    Dashboard,
    Board { project_id: i64, project_name: String },
}

#[component]
pub fn App() -> impl IntoView {
    // A stored token means a previous session; start on the dashboard and
    // let the first 401 bounce us back to login if it expired.
    let initial = if session::token().is_some() {
        AppView::Dashboard
    } else {
        AppView::Login
    };
    let (current_view, set_current_view) = signal(initial);

    provide_context(set_current_view);

    view! {
        <main class="app">
            {move || match current_view.get() {
                AppView::Login => view! { <Login /> }.into_any(),
                AppView::Register => view! { <Register /> }.into_any(),
                AppView::Dashboard => view! { <Dashboard /> }.into_any(),
                AppView::Board { project_id, project_name } => {
                    view! { <Board project_id=project_id project_name=project_name /> }.into_any()
                }
            }}
        </main>
    }
}
