//! Service layer for leadline
//!
//! Centralizes business logic between HTTP/CLI handlers and storage.
//! All methods are synchronous; async callers run them on the blocking pool.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod chat_service;
mod error;
mod lead_service;

pub use chat_service::{ChatService, ChatTurn};
pub use error::ServiceError;
pub use lead_service::LeadService;
