pub mod http;
pub mod session;

pub use http::ApiError;
