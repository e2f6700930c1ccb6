pub mod board;
pub mod comment;
pub mod notification;
pub mod project;
pub mod user;

pub use board::{BoardColumn, MoveRequest, Task};
pub use comment::TaskComment;
pub use notification::Notification;
pub use project::Project;
pub use user::{CurrentUser, TeamMember};
