//! Storage layer for leadline
//!
//! `SQLite` persistence for leads, their conversation messages and their
//! activity timeline, behind an `r2d2` connection pool.

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;
mod types;

pub use error::StorageError;
pub use storage::Storage;
pub use types::LeadStats;
