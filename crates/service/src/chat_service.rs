use std::sync::Arc;

use leadline_core::chat::{extract_contact, generate_reply};
use leadline_core::{LeadSource, Message, MessageRole, NewLead, timestamp_now};
use leadline_storage::Storage;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::lead_service::LeadService;

/// Outcome of one chat turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    /// The stored assistant reply
    pub reply: Message,
    /// Lead the conversation is attached to, if any
    pub lead_id: Option<String>,
    /// Whether this turn created the lead
    pub lead_created: bool,
}

/// Turns free-text chat messages into stored conversation turns, creating a
/// lead when the visitor identifies themselves.
pub struct ChatService {
    storage: Arc<Storage>,
    leads: Arc<LeadService>,
}

impl ChatService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>, leads: Arc<LeadService>) -> Self {
        Self { storage, leads }
    }

    /// Handle one inbound message.
    ///
    /// Without a `lead_id`, a lead is created when a name or email can be
    /// extracted from the text. A supplied `lead_id` must exist.
    pub fn handle_message(
        &self,
        text: &str,
        lead_id: Option<String>,
    ) -> Result<ChatTurn, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::InvalidInput("message is required".to_owned()));
        }

        let mut lead_created = false;
        let lead_id = match lead_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                if !self.storage.lead_exists(&id)? {
                    return Err(ServiceError::lead_not_found(&id));
                }
                Some(id)
            },
            None => {
                let contact = extract_contact(text);
                if contact.identifies_someone() {
                    let lead = self.leads.create(NewLead {
                        name: contact.name,
                        email: contact.email,
                        company: contact.company,
                        source: Some(LeadSource::Chat),
                        ..NewLead::default()
                    })?;
                    lead_created = true;
                    Some(lead.id)
                } else {
                    None
                }
            },
        };

        let inbound = Message::new(
            Uuid::new_v4().to_string(),
            lead_id.clone(),
            MessageRole::User,
            text.to_owned(),
            timestamp_now(),
        );
        self.storage.insert_message(&inbound)?;

        let reply = Message::new(
            Uuid::new_v4().to_string(),
            lead_id.clone(),
            MessageRole::Assistant,
            generate_reply(text).to_owned(),
            timestamp_now(),
        );
        self.storage.insert_message(&reply)?;

        tracing::debug!(lead_id = ?lead_id, lead_created, "Chat turn stored");
        Ok(ChatTurn { reply, lead_id, lead_created })
    }
}
