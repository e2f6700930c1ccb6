use leptos::html::Dialog;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppView;
use crate::core::models::Project;
use crate::features::auth::services as auth;
use crate::features::notifications::NotificationBell;
use crate::features::projects::components::ProjectModal;
use crate::features::projects::services::{self as project_api, ProjectDraft};

#[component]
pub fn Dashboard() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");

    let projects = RwSignal::new(Vec::<Project>::new());
    let (can_create, set_can_create) = signal(false);
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    let load_projects = move || {
        spawn_local(async move {
            match project_api::fetch_projects().await {
                Ok(list) => projects.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch projects: {}", e).into());
                }
            }
        });
    };
    load_projects();

    spawn_local(async move {
        match auth::current_user().await {
            Ok(user) => set_can_create.set(user.can_create_projects),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to check permissions: {}", e).into());
            }
        }
    });

    let open_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    let create_project = Callback::new(move |draft: ProjectDraft| {
        spawn_local(async move {
            match project_api::create_project(&draft).await {
                Ok(_) => load_projects(),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to create project: {}", e).into());
                }
            }
        });
    });

    let delete_project = move |project_id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this project?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match project_api::delete_project(project_id).await {
                Ok(()) => load_projects(),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to delete project: {}", e).into());
                }
            }
        });
    };

    let logout = move |_| {
        auth::logout();
        navigate.set(AppView::Login);
    };

    view! {
        <div class="dashboard-page">
            <header class="navbar">
                <h1>"TaskHive Dashboard"</h1>
                <div class="navbar-actions">
                    <NotificationBell />
                    {move || {
                        can_create
                            .get()
                            .then(|| {
                                view! {
                                    <button class="btn-primary" on:click=open_modal>
                                        "+ CREATE PROJECT"
                                    </button>
                                }
                            })
                    }}
                    <button class="btn-secondary" on:click=logout>"LOGOUT"</button>
                </div>
            </header>

            <div class="projects-grid">
                {move || {
                    projects
                        .get()
                        .into_iter()
                        .map(|project| {
                            let open_board = {
                                let title = project.title.clone();
                                let project_id = project.id;
                                move |_| {
                                    navigate.set(AppView::Board {
                                        project_id,
                                        project_name: title.clone(),
                                    });
                                }
                            };
                            let is_leader = project.is_leader();
                            let project_id = project.id;
                            let progress = project.progress.unwrap_or(0.0);
                            view! {
                                <div class="project-card" on:click=open_board>
                                    <div class="project-header">
                                        <h3>{project.title.clone()}</h3>
                                        {project
                                            .user_role
                                            .clone()
                                            .map(|role| {
                                                let label = if role == "leader" {
                                                    "👑 Leader"
                                                } else {
                                                    "👤 Member"
                                                };
                                                view! { <span class=format!("role-badge {}", role)>{label}</span> }
                                            })}
                                        {is_leader
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="delete-btn"
                                                        title="Delete this project"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            delete_project(project_id);
                                                        }
                                                    >
                                                        "🗑"
                                                    </button>
                                                }
                                            })}
                                    </div>
                                    <p>{project.description.clone().unwrap_or_default()}</p>
                                    {project
                                        .technology_stack
                                        .clone()
                                        .map(|stack| {
                                            view! {
                                                <div class="project-tech">
                                                    <span class="tech-label">"Tech: "</span>
                                                    {stack}
                                                </div>
                                            }
                                        })}
                                    {project
                                        .team_size
                                        .map(|size| {
                                            view! {
                                                <div class="project-team">"👥 " {size} " members"</div>
                                            }
                                        })}
                                    <div class="progress-section">
                                        <div class="progress-header">
                                            <span>"Progress"</span>
                                            <span class="progress-percentage">
                                                {format!("{:.0}%", progress)}
                                            </span>
                                        </div>
                                        <div class="progress-bar">
                                            <div
                                                class="progress-fill"
                                                style=format!("width: {:.0}%", progress)
                                            ></div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <ProjectModal on_create=create_project dialog_ref=dialog_ref />
        </div>
    }
}
