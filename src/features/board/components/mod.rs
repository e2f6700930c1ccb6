pub mod column;
pub mod column_modal;
pub mod comments_modal;
pub mod dnd;
pub mod task_card;
pub mod task_modal;

pub use column::BoardColumnView;
pub use column_modal::ColumnModal;
pub use comments_modal::CommentsModal;
pub use dnd::provide_drag_state;
pub use task_modal::{NewTaskDraft, TaskModal};
