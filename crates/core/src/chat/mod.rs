//! Chat capture heuristics.
//!
//! Both halves are pure functions: [`extract_contact`] pulls best-effort
//! contact details out of free text, [`generate_reply`] picks a canned
//! answer by keyword. Neither is an NLP parser and neither calls out to a model.

mod extract;
mod reply;

pub use extract::{
    ExtractedContact, extract_company, extract_contact, extract_email, extract_name,
};
pub use reply::{ReplyTopic, generate_reply};
