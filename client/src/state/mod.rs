//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth`, `search`, and `ui` are app-wide contexts created once in `App`.
//! `list` is instantiated per page; pages never read each other's lists.

pub mod auth;
pub mod list;
pub mod search;
pub mod ui;
