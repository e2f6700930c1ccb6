pub mod auth;
pub mod board;
pub mod notifications;
pub mod projects;
