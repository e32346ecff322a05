use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::conversation::Message;
use crate::lead::Lead;

/// A lead together with its conversation (oldest first) and timeline (newest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadDetail {
    #[serde(flatten)]
    pub lead: Lead,
    pub messages: Vec<Message>,
    pub activities: Vec<Activity>,
}
