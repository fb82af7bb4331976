//! Serving of the single-page web client.
//!
//! Static assets are mounted under a prefix, the favicon is served from the
//! bundle root, and every request no other route claims gets the application
//! shell so client-side routes survive a reload.

pub mod assets;
pub mod handlers;
pub mod routes;
