//! Networking: REST calls against the school backend.

pub mod api;
