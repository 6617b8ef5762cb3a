//! Request handlers, one module per route group.

pub mod admin;
pub mod analytics;
pub mod estimation;
pub mod history;
