//! Test utilities and module declarations for storage tests.

use crate::Storage;
use leadline_core::{Lead, LeadSource, Message, MessageRole, NewLead, timestamp_now};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_lead(id: &str, name: &str, company: &str) -> Lead {
    Lead::new(
        id.to_owned(),
        NewLead {
            name: Some(name.to_owned()),
            email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
            company: Some(company.to_owned()),
            source: Some(LeadSource::Website),
            ..NewLead::default()
        },
        timestamp_now(),
    )
}

pub fn create_test_message(
    id: &str,
    lead_id: Option<&str>,
    role: MessageRole,
    text: &str,
) -> Message {
    Message::new(id.to_owned(), lead_id.map(str::to_owned), role, text.to_owned(), timestamp_now())
}
