//! Document listing endpoint.

pub mod handlers;
pub mod routes;
