//! Small helpers shared by the auth flow: token signing and device codes.

pub mod device_code;
pub mod jwt;
