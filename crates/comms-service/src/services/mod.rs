//! Service layer for the comms backend.
//!
//! Services encapsulate business logic and coordinate
//! between handlers and database queries.

pub mod membership;

pub use membership::{MembershipService, MembershipStore, PgMembershipStore};
