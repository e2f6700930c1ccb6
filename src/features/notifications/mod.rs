pub mod bell;
pub mod services;

pub use bell::NotificationBell;
