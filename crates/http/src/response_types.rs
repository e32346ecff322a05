//! Response types (Serialize)

use chrono::{DateTime, Utc};
use leadline_core::{Message, MessageRole};
use leadline_service::ChatTurn;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Assistant reply as the chat widget consumes it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub id: String,
    pub lead_id: Option<String>,
    pub role: MessageRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for ChatReply {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            lead_id: message.lead_id,
            role: message.role,
            text: message.text,
            timestamp: message.created_at,
        }
    }
}

/// `leadId` is repeated at top level so the widget can remember it for the next turn.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: ChatReply,
    pub lead_id: Option<String>,
}

impl From<ChatTurn> for ChatResponse {
    fn from(turn: ChatTurn) -> Self {
        Self { reply: turn.reply.into(), lead_id: turn.lead_id }
    }
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
