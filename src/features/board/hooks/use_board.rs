use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::{BoardColumn, MoveRequest};
use crate::features::board::services::{handle_drop, BoardService, HttpBoardService, MoveOutcome};

/// Board state and handlers for the kanban page.
pub struct BoardHook {
    pub columns: RwSignal<Vec<BoardColumn>>,
    /// User-visible failure notice, e.g. a rejected move. `None` when
    /// nothing needs attention.
    pub notice: RwSignal<Option<String>>,
    pub drop_task: Callback<MoveRequest>,
    pub reload: Callback<()>,
}

pub fn use_board(project_id: i64) -> BoardHook {
    let columns = RwSignal::new(Vec::<BoardColumn>::new());
    let notice = RwSignal::new(None::<String>);

    let load = move || {
        spawn_local(async move {
            match HttpBoardService.fetch_board(project_id).await {
                Ok(fresh) => columns.set(fresh),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch board: {}", e).into());
                }
            }
        });
    };

    // Initial fetch on mount.
    load();

    let drop_task = Callback::new(move |request: MoveRequest| {
        spawn_local(async move {
            match handle_drop(&HttpBoardService, columns, project_id, request).await {
                MoveOutcome::Reverted { detail } => {
                    web_sys::console::error_1(&format!("Move rejected: {}", detail).into());
                    notice.set(Some(format!("Failed to move task: {}", detail)));
                }
                MoveOutcome::InvalidDestination => {
                    web_sys::console::warn_1(&"Dropped on an unknown column".into());
                }
                // SameColumn, TaskMissing and Confirmed need no surfacing.
                _ => {}
            }
        });
    });

    let reload = Callback::new(move |_: ()| load());

    BoardHook {
        columns,
        notice,
        drop_task,
        reload,
    }
}
