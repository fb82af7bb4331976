//! Module for core business logic services.
//!
//! Services sit between the HTTP handlers and the storage capabilities and
//! own the error classification of each operation.

pub mod user_service;
