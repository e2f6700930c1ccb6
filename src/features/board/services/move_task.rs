//! The drag-and-drop move coordinator.
//!
//! A drop is applied to the in-memory board synchronously, before the
//! confirmation request is issued, so the card never snaps back while the
//! network round-trip is in flight. If the server rejects the move the
//! speculative layout is thrown away and the whole board is re-fetched;
//! there is no local undo, because an inverse mutation could clobber a
//! concurrent edit by another user. The refetch is the sole recovery path
//! and no retry of the move itself is attempted.
//!
//! Overlapping moves are not coordinated against each other: the event
//! loop serializes them, and a failed first move's refetch may discard a
//! second move's optimistic state before it confirms. Accepted limitation.

use leptos::prelude::*;

use crate::core::board::{apply_local_move, LocalMove, MoveError};
use crate::core::models::{BoardColumn, MoveRequest};

use super::board_api::BoardService;

/// How a drop was resolved. Only `Reverted` carries anything the user
/// needs to see.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// Dropped back into the source column. Within-column order is not
    /// meaningful business state, so nothing is persisted.
    SameColumn,
    /// The task disappeared between drag-start and drop; silent no-op.
    TaskMissing,
    /// The drop target named no column on the board; no-op.
    InvalidDestination,
    /// Server accepted the move; the optimistic board is already correct.
    Confirmed,
    /// Server rejected the move; the board was replaced with fresh server
    /// truth and the detail should be surfaced to the user.
    Reverted { detail: String },
}

pub async fn handle_drop<S: BoardService>(
    service: &S,
    board: RwSignal<Vec<BoardColumn>>,
    project_id: i64,
    request: MoveRequest,
) -> MoveOutcome {
    if request.source_column_id == request.dest_column_id {
        return MoveOutcome::SameColumn;
    }

    // Optimistic update, synchronous and visible to the renderer before
    // the first await point.
    let mut applied = Ok(LocalMove::TaskMissing);
    board.update(|columns| {
        applied = apply_local_move(columns, request.task_id, request.dest_column_id);
    });
    match applied {
        Ok(LocalMove::Applied) => {}
        Ok(LocalMove::TaskMissing) => return MoveOutcome::TaskMissing,
        Err(MoveError::InvalidDestination { .. }) => return MoveOutcome::InvalidDestination,
    }

    match service
        .confirm_move(request.task_id, request.dest_column_id)
        .await
    {
        Ok(()) => MoveOutcome::Confirmed,
        Err(err) => {
            // Discard the speculative layout and converge to server truth.
            // If the recovery fetch fails too, the optimistic state stays
            // in place until the next successful fetch.
            if let Ok(fresh) = service.fetch_board(project_id).await {
                board.set(fresh);
            }
            MoveOutcome::Reverted { detail: err.detail }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::core::models::Task;
    use crate::core::services::ApiError;

    fn make_task(id: i64, status_id: i64) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: String::new(),
            status_id,
            assigned_to: None,
            assigned_user_name: None,
            assigned_user_email: None,
        }
    }

    fn make_column(id: i64, task_ids: &[i64]) -> BoardColumn {
        BoardColumn {
            status_id: id,
            status_name: format!("Column {}", id),
            user_role: None,
            current_user_id: None,
            tasks: task_ids.iter().map(|&t| make_task(t, id)).collect(),
        }
    }

    /// Scripted in place of the HTTP service: counts calls, returns a
    /// canned confirmation result and a canned fresh board.
    struct StubService {
        confirm_result: Result<(), ApiError>,
        fetch_result: Result<Vec<BoardColumn>, ApiError>,
        confirm_calls: Cell<usize>,
        fetch_calls: Cell<usize>,
    }

    impl StubService {
        fn accepting() -> Self {
            Self {
                confirm_result: Ok(()),
                fetch_result: Ok(Vec::new()),
                confirm_calls: Cell::new(0),
                fetch_calls: Cell::new(0),
            }
        }

        fn rejecting(detail: &str, fresh: Vec<BoardColumn>) -> Self {
            Self {
                confirm_result: Err(ApiError {
                    status: Some(400),
                    detail: detail.to_string(),
                }),
                fetch_result: Ok(fresh),
                confirm_calls: Cell::new(0),
                fetch_calls: Cell::new(0),
            }
        }
    }

    impl BoardService for StubService {
        async fn fetch_board(&self, _project_id: i64) -> Result<Vec<BoardColumn>, ApiError> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            self.fetch_result.clone()
        }

        async fn confirm_move(
            &self,
            _task_id: i64,
            _dest_column_id: i64,
        ) -> Result<(), ApiError> {
            self.confirm_calls.set(self.confirm_calls.get() + 1);
            self.confirm_result.clone()
        }
    }

    fn request(task_id: i64, source: i64, dest: i64) -> MoveRequest {
        MoveRequest {
            task_id,
            source_column_id: source,
            dest_column_id: dest,
        }
    }

    #[tokio::test]
    async fn confirmed_move_matches_the_local_apply_alone() {
        let board = RwSignal::new(vec![make_column(1, &[100]), make_column(2, &[])]);
        let mut expected = board.get_untracked();
        apply_local_move(&mut expected, 100, 2).unwrap();
        let service = StubService::accepting();

        let outcome = handle_drop(&service, board, 7, request(100, 1, 2)).await;

        assert_eq!(outcome, MoveOutcome::Confirmed);
        // No extra mutation from the response.
        assert_eq!(board.get_untracked(), expected);
        assert_eq!(service.confirm_calls.get(), 1);
        assert_eq!(service.fetch_calls.get(), 0);
    }

    #[tokio::test]
    async fn successful_scenario_moves_the_card_across() {
        let board = RwSignal::new(vec![make_column(1, &[100]), make_column(2, &[])]);
        let service = StubService::accepting();

        handle_drop(&service, board, 7, request(100, 1, 2)).await;

        let columns = board.get_untracked();
        assert!(columns[0].tasks.is_empty());
        assert_eq!(columns[1].tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![100]);
        assert_eq!(columns[1].tasks[0].status_id, 2);
    }

    #[tokio::test]
    async fn same_column_drop_is_a_pure_noop() {
        let initial = vec![make_column(1, &[100, 101]), make_column(2, &[])];
        let board = RwSignal::new(initial.clone());
        let service = StubService::accepting();

        let outcome = handle_drop(&service, board, 7, request(100, 1, 1)).await;

        assert_eq!(outcome, MoveOutcome::SameColumn);
        assert_eq!(board.get_untracked(), initial);
        assert_eq!(service.confirm_calls.get(), 0);
        assert_eq!(service.fetch_calls.get(), 0);
    }

    #[tokio::test]
    async fn unknown_task_issues_no_network_call() {
        let initial = vec![make_column(1, &[100]), make_column(2, &[])];
        let board = RwSignal::new(initial.clone());
        let service = StubService::accepting();

        let outcome = handle_drop(&service, board, 7, request(999, 1, 2)).await;

        assert_eq!(outcome, MoveOutcome::TaskMissing);
        assert_eq!(board.get_untracked(), initial);
        assert_eq!(service.confirm_calls.get(), 0);
    }

    #[tokio::test]
    async fn unknown_destination_issues_no_network_call() {
        let initial = vec![make_column(1, &[100]), make_column(2, &[])];
        let board = RwSignal::new(initial.clone());
        let service = StubService::accepting();

        let outcome = handle_drop(&service, board, 7, request(100, 1, 55)).await;

        assert_eq!(outcome, MoveOutcome::InvalidDestination);
        assert_eq!(board.get_untracked(), initial);
        assert_eq!(service.confirm_calls.get(), 0);
    }

    #[tokio::test]
    async fn rejected_move_settles_to_the_fresh_fetch() {
        // Server truth diverges from both the initial and the optimistic
        // layout, e.g. another user edited the board in the interim.
        let fresh = vec![make_column(1, &[101]), make_column(2, &[100])];
        let board = RwSignal::new(vec![make_column(1, &[100]), make_column(2, &[])]);
        let service = StubService::rejecting("Task is locked", fresh.clone());

        let outcome = handle_drop(&service, board, 7, request(100, 1, 2)).await;

        assert_eq!(
            outcome,
            MoveOutcome::Reverted {
                detail: "Task is locked".to_string()
            }
        );
        assert_eq!(board.get_untracked(), fresh);
        assert_eq!(service.confirm_calls.get(), 1);
        assert_eq!(service.fetch_calls.get(), 1);
    }

    #[tokio::test]
    async fn failed_recovery_fetch_keeps_the_optimistic_layout() {
        let board = RwSignal::new(vec![make_column(1, &[100]), make_column(2, &[])]);
        let mut optimistic = board.get_untracked();
        apply_local_move(&mut optimistic, 100, 2).unwrap();
        let service = StubService {
            confirm_result: Err(ApiError::network("connection reset")),
            fetch_result: Err(ApiError::network("connection reset")),
            confirm_calls: Cell::new(0),
            fetch_calls: Cell::new(0),
        };

        let outcome = handle_drop(&service, board, 7, request(100, 1, 2)).await;

        assert_eq!(
            outcome,
            MoveOutcome::Reverted {
                detail: "connection reset".to_string()
            }
        );
        assert_eq!(board.get_untracked(), optimistic);
        assert_eq!(service.fetch_calls.get(), 1);
    }
}
