//! Process-level modules (configuration).

pub mod config;
