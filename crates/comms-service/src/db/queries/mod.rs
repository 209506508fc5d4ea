//! Database queries for the comms backend service.
//!
//! This module contains database query functions organized by domain.

pub mod membership;
