pub mod board;
pub mod models;
pub mod services;
