//! Repository implementations for database access
//!
//! Patterns:
//! - single-statement writes where possible (no check-then-insert)
//! - transactions for multi-step operations
//! - unique violations mapped to typed conflict errors

pub mod ads;

pub use ads::{Ad, AdRepo, DbError};
