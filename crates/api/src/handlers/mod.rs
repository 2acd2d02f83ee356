//! HTTP request handlers.

pub mod project;
pub mod version;
