//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, cookies,
//! clock, theme) from page and component logic.

pub mod auth;
pub mod clock;
pub mod dark_mode;
pub mod session;
pub mod storage;
