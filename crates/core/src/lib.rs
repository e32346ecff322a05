//! Core types for leadline
//!
//! Domain types shared across all other crates, plus the pure chat heuristics.

mod activity;
pub mod chat;
mod clock;
pub mod constants;
mod conversation;
mod detail;
pub mod env_config;
mod error;
mod lead;
mod pipeline;
mod query;

pub use activity::*;
pub use clock::{format_timestamp, timestamp_now};
pub use constants::*;
pub use conversation::*;
pub use detail::LeadDetail;
pub use env_config::{env_parse_with_default, env_string};
pub use error::*;
pub use lead::*;
pub use pipeline::*;
pub use query::*;
