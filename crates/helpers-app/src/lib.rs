//! Demo HTTP server exposing the ID and password helpers.

pub mod app;
pub mod service_handler;
