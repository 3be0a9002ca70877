//! Shared record model and pure logic for the school administration app.
//!
//! This crate owns the backend wire DTOs, endpoint paths, and every piece of
//! logic that does not need a browser: the monthly class-count pivot, list
//! search, grid projection, bulk-delete reconciliation, and form validation.
//! Both `client` and `cli` depend on it, so its modules stay free of I/O.

pub mod bulk;
pub mod endpoints;
pub mod error;
pub mod escape;
pub mod filters;
pub mod forms;
pub mod grid;
pub mod pivot;
pub mod repeat;
pub mod search;
pub mod types;
pub mod validate;

pub use error::ApiError;
pub use repeat::RepeatGroup;
pub use validate::FieldErrors;
