//! Append-only audit entries describing what happened to a lead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pipeline::{LeadSource, LeadStage, LeadStatus};

/// Activity type written when a lead is inserted.
pub const ACTIVITY_CREATED: &str = "created";

/// Activity type written when a lead moves to another pipeline stage.
pub const ACTIVITY_STAGE_CHANGE: &str = "stage_change";

/// Activity type written when a lead's status changes.
pub const ACTIVITY_STATUS_CHANGE: &str = "status_change";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub lead_id: String,
    /// Free-form type tag, see the `ACTIVITY_*` constants for the built-in ones
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Activity joined with the owning lead's display fields, for the global feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFeedItem {
    #[serde(flatten)]
    pub activity: Activity,
    pub lead_name: Option<String>,
    pub lead_company: Option<String>,
}

#[must_use]
pub fn created_description(source: LeadSource) -> String {
    format!("Lead created via {source}")
}

#[must_use]
pub fn stage_change_description(from: LeadStage, to: LeadStage) -> String {
    format!("Stage changed from {from} to {to}")
}

#[must_use]
pub fn status_change_description(from: LeadStatus, to: LeadStatus) -> String {
    format!("Status changed from {from} to {to}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_descriptions() {
        assert_eq!(
            stage_change_description(LeadStage::Inquiry, LeadStage::Qualified),
            "Stage changed from inquiry to qualified"
        );
        assert_eq!(
            status_change_description(LeadStatus::New, LeadStatus::Stale),
            "Status changed from new to stale"
        );
        assert_eq!(created_description(LeadSource::ColdOutreach), "Lead created via cold-outreach");
    }

    #[test]
    fn feed_item_flattens_activity() {
        let item = ActivityFeedItem {
            activity: Activity {
                id: "a1".to_owned(),
                lead_id: "l1".to_owned(),
                activity_type: ACTIVITY_CREATED.to_owned(),
                description: "Lead created via chat".to_owned(),
                created_at: Utc::now(),
            },
            lead_name: Some("Jane Doe".to_owned()),
            lead_company: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "created");
        assert_eq!(json["lead_id"], "l1");
        assert_eq!(json["lead_name"], "Jane Doe");
    }
}
