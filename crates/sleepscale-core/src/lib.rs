//! sleepscale-core
//!
//! Pure domain types and storage key conventions.
//! No AWS SDK dependency; this is the shared vocabulary of the sleepscale system.

pub mod clock;
pub mod error;
pub mod keys;
pub mod models;
