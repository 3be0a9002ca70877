//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (layout, toasts, error panels) and the
//! generic table and form building blocks every screen is assembled from.

pub mod data_table;
pub mod error_panel;
pub mod form_field;
pub mod layout;
pub mod month_picker;
pub mod stepper;
pub mod toast;
