//! Services backing the HTTP handlers.

pub mod password;
