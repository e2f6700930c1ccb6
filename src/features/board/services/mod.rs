pub mod board_api;
pub mod move_task;

pub use board_api::{BoardService, HttpBoardService};
pub use move_task::{handle_drop, MoveOutcome};
