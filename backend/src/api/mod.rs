//! Central module for the JSON API mounted under `/ui/api`, excluding the
//! authentication routes which live in `auth`.

pub mod common;
pub mod document;
pub mod user;
