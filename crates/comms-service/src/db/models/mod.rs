//! Database models for the comms backend service.

pub mod membership;

pub use membership::*;
