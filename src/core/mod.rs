//! Core utilities shared by every layer

#[macro_use]
#[path = "utils/log.rs"]
pub mod log;
