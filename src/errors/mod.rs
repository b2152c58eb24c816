//! Error handling module

pub mod errors;

pub use errors::{AppError, AppResult};
