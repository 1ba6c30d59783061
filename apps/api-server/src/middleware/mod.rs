//! Request-level plumbing shared by all handlers.

pub mod error;
