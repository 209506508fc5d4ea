//! Internal Comms Backend Service
//!
//! This crate provides the backend HTTP service for the internal comms
//! product, handling:
//!
//! - **Authenticated Routing**: Every comms route sits behind an
//!   authentication middleware that verifies the caller's session token
//! - **Organization Membership**: Resolve which organization a user belongs
//!   to via a read-only lookup against PostgreSQL
//!
//! ## Architecture
//!
//! The service is a thin, stateless HTTP layer over externally owned data.
//! Identity is established by an external authentication collaborator; this
//! service only verifies the token it issued. The membership table is
//! externally owned and read-only from here.
//!
//! ## Modules
//!
//! - [`auth`]: Token verification and the authentication middleware
//! - [`config`]: Configuration loading from environment variables
//! - [`db`]: Database connectivity and queries
//! - [`error`]: Custom error types with Axum integration
//! - [`handlers`]: HTTP route handlers
//! - [`services`]: Business logic over injectable stores
//! - [`state`]: Shared application state

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod services;
pub mod state;

pub use error::{AppError, AppResult};
