use std::sync::Arc;

use leadline_core::{
    ACTIVITY_CREATED, ACTIVITY_STAGE_CHANGE, ACTIVITY_STATUS_CHANGE, ActivityFeedItem, Lead,
    LeadDetail, LeadFilter, LeadPatch, NewLead, created_description, stage_change_description,
    status_change_description, timestamp_now,
};
use leadline_storage::{LeadStats, Storage};
use uuid::Uuid;

use crate::error::ServiceError;

/// Lead lifecycle: CRUD plus the activity entries each change produces.
pub struct LeadService {
    storage: Arc<Storage>,
}

impl LeadService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn list(&self, filter: &LeadFilter) -> Result<Vec<Lead>, ServiceError> {
        Ok(self.storage.list_leads(filter)?)
    }

    pub fn stats(&self) -> Result<LeadStats, ServiceError> {
        Ok(self.storage.lead_stats()?)
    }

    pub fn get(&self, id: &str) -> Result<LeadDetail, ServiceError> {
        let lead = self.storage.get_lead(id)?.ok_or_else(|| ServiceError::lead_not_found(id))?;
        let messages = self.storage.get_lead_messages(id)?;
        let activities = self.storage.get_lead_activities(id)?;
        Ok(LeadDetail { lead, messages, activities })
    }

    /// Insert a lead with defaults for omitted fields and log its `created` activity.
    pub fn create(&self, input: NewLead) -> Result<Lead, ServiceError> {
        let lead = Lead::new(Uuid::new_v4().to_string(), input, timestamp_now());
        self.storage.insert_lead(&lead)?;
        self.storage.record_activity(
            &lead.id,
            ACTIVITY_CREATED,
            &created_description(lead.source),
        )?;
        tracing::info!(lead_id = %lead.id, source = %lead.source, "Lead created");
        Ok(lead)
    }

    /// Apply a partial update. An empty patch returns the stored lead untouched.
    ///
    /// Stage and status transitions are not validated against pipeline order;
    /// an actual change of either is recorded in the activity log, in the same
    /// transaction as the update itself.
    pub fn update(&self, id: &str, patch: LeadPatch) -> Result<Lead, ServiceError> {
        let (lead, activities) = self
            .storage
            .patch_lead(id, patch, timestamp_now(), transition_activities)?
            .ok_or_else(|| ServiceError::lead_not_found(id))?;
        for activity in &activities {
            tracing::info!(
                lead_id = id,
                activity_type = %activity.activity_type,
                "{}",
                activity.description
            );
        }
        Ok(lead)
    }

    pub fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.storage.delete_lead(id)? {
            return Err(ServiceError::lead_not_found(id));
        }
        tracing::info!(lead_id = id, "Lead deleted");
        Ok(())
    }

    pub fn recent_activities(&self, limit: usize) -> Result<Vec<ActivityFeedItem>, ServiceError> {
        Ok(self.storage.get_recent_activities(limit)?)
    }
}

/// Activities describing the stage and status changes between two versions of a lead.
fn transition_activities(before: &Lead, after: &Lead) -> Vec<(&'static str, String)> {
    let mut activities = Vec::new();
    if before.stage != after.stage {
        activities
            .push((ACTIVITY_STAGE_CHANGE, stage_change_description(before.stage, after.stage)));
    }
    if before.status != after.status {
        activities
            .push((ACTIVITY_STATUS_CHANGE, status_change_description(before.status, after.status)));
    }
    activities
}
