//! Pure board mutations.
//!
//! The in-memory board is the single source of truth for rendering. The one
//! mutation it supports, [`apply_local_move`], is synchronous and touches no
//! external service, so the drag-and-drop layer can apply it before any
//! network round-trip resolves.

use crate::core::models::BoardColumn;

/// What a local move did to the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocalMove {
    /// Task removed from its column and appended to the destination.
    Applied,
    /// The task id is not on the board; the board was left untouched. This
    /// is not an error: the UI can only drop tasks it already rendered, so
    /// a miss means the task vanished between drag-start and drop.
    TaskMissing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveError {
    /// The destination column id names no column on this board. Should not
    /// happen while drop targets come from the rendered columns.
    InvalidDestination { column_id: i64 },
}

/// Move `task_id` to the end of column `dest_column_id`, updating the
/// task's own `status_id` to match. The board is left unchanged unless
/// `Ok(LocalMove::Applied)` is returned.
pub fn apply_local_move(
    columns: &mut [BoardColumn],
    task_id: i64,
    dest_column_id: i64,
) -> Result<LocalMove, MoveError> {
    let Some(source_idx) = columns
        .iter()
        .position(|col| col.tasks.iter().any(|t| t.id == task_id))
    else {
        return Ok(LocalMove::TaskMissing);
    };

    // Validate the destination before removing anything so a rejected move
    // leaves the board exactly as it was.
    let Some(dest_idx) = columns
        .iter()
        .position(|col| col.status_id == dest_column_id)
    else {
        return Err(MoveError::InvalidDestination {
            column_id: dest_column_id,
        });
    };

    let task_idx = columns[source_idx]
        .tasks
        .iter()
        .position(|t| t.id == task_id)
        .unwrap_or_default();
    let mut task = columns[source_idx].tasks.remove(task_idx);
    task.status_id = dest_column_id;
    columns[dest_idx].tasks.push(task);

    Ok(LocalMove::Applied)
}

/// Total number of tasks across all columns.
pub fn task_count(columns: &[BoardColumn]) -> usize {
    columns.iter().map(|col| col.tasks.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Task;

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

    #[test]
    fn move_between_columns_transfers_ownership() {
        let mut board = vec![make_column(1, &[100, 101]), make_column(2, &[200])];
        let before_count = task_count(&board);

        let result = apply_local_move(&mut board, 100, 2);

        assert_eq!(result, Ok(LocalMove::Applied));
        assert!(board[0].tasks.iter().all(|t| t.id != 100));
        // Appended to the end of the destination, status_id rewritten.
        assert_eq!(board[1].tasks.last().map(|t| t.id), Some(100));
        assert_eq!(board[1].tasks.last().map(|t| t.status_id), Some(2));
        assert_eq!(task_count(&board), before_count);
        // The task appears exactly once on the whole board.
        let occurrences: usize = board
            .iter()
            .map(|c| c.tasks.iter().filter(|t| t.id == 100).count())
            .sum();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn missing_task_is_a_silent_noop() {
        let mut board = vec![make_column(1, &[100]), make_column(2, &[])];
        let snapshot = board.clone();

        let result = apply_local_move(&mut board, 999, 2);

        assert_eq!(result, Ok(LocalMove::TaskMissing));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn unknown_destination_is_rejected_without_mutation() {
        let mut board = vec![make_column(1, &[100]), make_column(2, &[])];
        let snapshot = board.clone();

        let result = apply_local_move(&mut board, 100, 77);

        assert_eq!(result, Err(MoveError::InvalidDestination { column_id: 77 }));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn move_within_the_same_column_appends_to_the_end() {
        // The coordinator short-circuits same-column drops before reaching
        // this function, but the mutation itself is still well defined.
        let mut board = vec![make_column(1, &[100, 101, 102])];

        let result = apply_local_move(&mut board, 100, 1);

        assert_eq!(result, Ok(LocalMove::Applied));
        let ids: Vec<i64> = board[0].tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![101, 102, 100]);
    }

    #[test]
    fn moved_task_keeps_its_fields() {
        let mut board = vec![make_column(1, &[100]), make_column(2, &[])];
        board[0].tasks[0].assigned_user_name = Some("Ada".to_string());

        apply_local_move(&mut board, 100, 2).unwrap();

        let task = &board[1].tasks[0];
        assert_eq!(task.title, "Task 100");
        assert_eq!(task.assigned_user_name.as_deref(), Some("Ada"));
    }
}
