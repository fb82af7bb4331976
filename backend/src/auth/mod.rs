//! Authentication module: registration, login, session tokens and the
//! middleware guarding authenticated routes.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
