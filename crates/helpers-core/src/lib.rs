//! Shared building blocks: the structured error model, entity IDs and
//! configuration loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod id;
