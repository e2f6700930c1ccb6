use leptos::html::Dialog;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppView;
use crate::core::models::{Task, TeamMember};
use crate::features::board::components::{
    provide_drag_state, BoardColumnView, ColumnModal, CommentsModal, NewTaskDraft, TaskModal,
};
use crate::features::board::hooks::{use_board, BoardHook};
use crate::features::board::services::board_api;
use crate::features::notifications::NotificationBell;

#[component]
pub fn Board(project_id: i64, project_name: String) -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");

    let BoardHook {
        columns,
        notice,
        drop_task,
        reload,
    } = use_board(project_id);
    provide_drag_state();

    // Team members for the assignee select in the task modal.
    let (members, set_members) = signal(Vec::<TeamMember>::new());
    spawn_local(async move {
        match board_api::project_members(project_id).await {
            Ok(list) => set_members.set(list),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch team members: {}", e).into());
            }
        }
    });

    let (selected_task, set_selected_task) = signal(None::<Task>);
    let task_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let column_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    // Adding tasks and columns is reserved for the project leader; the
    // board endpoint reports our role on every column.
    let is_leader = move || {
        columns.with(|cols| {
            cols.first()
                .and_then(|col| col.user_role.as_deref())
                .map(|role| role == "leader")
                .unwrap_or(false)
        })
    };

    let back_to_dashboard = move |_| navigate.set(AppView::Dashboard);

    let open_task_modal = move |_| {
        if let Some(dialog) = task_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    let open_column_modal = move |_| {
        if let Some(dialog) = column_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    let create_task = Callback::new(move |draft: NewTaskDraft| {
        spawn_local(async move {
            match board_api::create_task(
                project_id,
                draft.status_id,
                &draft.title,
                &draft.description,
                draft.assigned_to,
            )
            .await
            {
                // The response lacks the joined assignee name, so refetch
                // the board instead of inserting the bare task.
                Ok(_) => reload.run(()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to create task: {}", e).into());
                    notice.set(Some(format!("Failed to create task: {}", e.detail)));
                }
            }
        });
    });

    let create_column = Callback::new(move |name: String| {
        spawn_local(async move {
            match board_api::create_column(project_id, &name).await {
                Ok(column) => columns.update(|cols| cols.push(column)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to create column: {}", e).into());
                    notice.set(Some(format!("Failed to create column: {}", e.detail)));
                }
            }
        });
    });

    let select_task = Callback::new(move |task: Task| {
        set_selected_task.set(Some(task));
    });

    view! {
        <div class="board-page">
            <header class="kanban-header">
                <div class="kanban-header-left">
                    <h1>"Project: " {project_name}</h1>
                    {move || {
                        is_leader()
                            .then(|| view! { <span class="role-badge leader">"👑 Leader"</span> })
                    }}
                </div>
                <div class="kanban-actions">
                    <NotificationBell />
                    {move || {
                        is_leader()
                            .then(|| {
                                view! {
                                    <button class="btn-primary" on:click=open_task_modal>
                                        "+ ADD TASK"
                                    </button>
                                    <button class="btn-primary" on:click=open_column_modal>
                                        "+ ADD COLUMN"
                                    </button>
                                }
                            })
                    }}
                    <button class="btn-secondary" on:click=back_to_dashboard>"← DASHBOARD"</button>
                </div>
            </header>

            {move || {
                notice
                    .get()
                    .map(|msg| {
                        view! {
                            <div class="notice-banner">
                                <span>{msg}</span>
                                <button class="notice-dismiss" on:click=move |_| notice.set(None)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}

            <div class="kanban-board">
                {move || {
                    columns
                        .get()
                        .into_iter()
                        .map(|column| {
                            view! {
                                <BoardColumnView
                                    column=column
                                    on_drop=drop_task
                                    on_select=select_task
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            {move || {
                selected_task
                    .get()
                    .map(|task| {
                        view! {
                            <CommentsModal
                                task=task
                                on_close=Callback::new(move |_| set_selected_task.set(None))
                            />
                        }
                    })
            }}

            <TaskModal
                columns=columns
                members=members
                on_create=create_task
                dialog_ref=task_dialog_ref
            />
            <ColumnModal on_create=create_column dialog_ref=column_dialog_ref />
        </div>
    }
}
