//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped orchestration (fetch, search narrowing,
//! submit) through `shared` and delegates rendering to `components`.

pub mod attendance;
pub mod class_count;
pub mod dashboard;
pub mod directors;
pub mod earnings;
pub mod employee_form;
pub mod employees;
pub mod expenses;
pub mod login;
pub mod register;
pub mod running_month;
pub(crate) mod shared;
pub mod student_form;
pub mod students;
pub mod timing;
