//! Shared drag state for the board.
//!
//! HTML5 drag-and-drop carries its payload through signals rather than the
//! DataTransfer store, so drop handlers can read it without string
//! round-trips. One card at most is dragging at any time.

use leptos::prelude::*;

/// What is being dragged: which task, and which column it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragPayload {
    pub task_id: i64,
    pub source_column_id: i64,
}

#[derive(Clone, Copy)]
pub struct DragState {
    pub dragging: RwSignal<Option<DragPayload>>,
}

/// Create the drag state and provide it through context for the board's
/// cards and columns. Call once per board view.
pub fn provide_drag_state() -> DragState {
    let state = DragState {
        dragging: RwSignal::new(None),
    };
    provide_context(state);
    state
}

pub fn use_drag_state() -> DragState {
    use_context::<DragState>().expect("drag state context")
}
