//! sleepscale-storage
//!
//! The record store. Scored assessments, sleep diary entries and report
//! PDFs are kept as objects, either in S3 or in an in-process map.

pub mod client;
pub mod error;
pub mod objects;
pub mod records;
pub mod store;
