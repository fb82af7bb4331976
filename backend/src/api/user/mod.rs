//! Account listing endpoints.

pub mod handlers;
pub mod routes;
