//! Lead record and the inputs that create or modify it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_LEAD_SCORE, MIN_LEAD_SCORE};
use crate::pipeline::{LeadPriority, LeadSource, LeadStage, LeadStatus};

/// A prospective customer tracked through the sales pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier, assigned once at insert
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    /// Job title of the contact
    pub title: Option<String>,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub stage: LeadStage,
    pub priority: LeadPriority,
    pub notes: Option<String>,
    /// Qualification score, 0..=100
    pub score: i64,
    /// Expected deal value
    pub amount: f64,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    /// Build a fresh lead from creation input, applying defaults for anything omitted.
    #[must_use]
    pub fn new(id: String, input: NewLead, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            title: input.title,
            source: input.source.unwrap_or_default(),
            status: input.status.unwrap_or_default(),
            stage: input.stage.unwrap_or_default(),
            priority: input.priority.unwrap_or_default(),
            notes: input.notes,
            score: clamp_score(input.score.unwrap_or(MIN_LEAD_SCORE)),
            amount: input.amount.unwrap_or(0.0),
            assigned_to: input.assigned_to,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields accepted when creating a lead. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewLead {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub source: Option<LeadSource>,
    pub status: Option<LeadStatus>,
    pub stage: Option<LeadStage>,
    pub priority: Option<LeadPriority>,
    pub notes: Option<String>,
    pub score: Option<i64>,
    pub amount: Option<f64>,
    pub assigned_to: Option<String>,
}

/// Partial update of a lead.
///
/// Outer `None` leaves the field alone. For nullable text fields the inner
/// `Option` is the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadPatch {
    pub name: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub company: Option<Option<String>>,
    pub title: Option<Option<String>>,
    pub source: Option<LeadSource>,
    pub status: Option<LeadStatus>,
    pub stage: Option<LeadStage>,
    pub priority: Option<LeadPriority>,
    pub notes: Option<Option<String>>,
    pub score: Option<i64>,
    pub amount: Option<f64>,
    pub assigned_to: Option<Option<String>>,
}

impl LeadPatch {
    /// True when no recognized field was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.title.is_none()
            && self.source.is_none()
            && self.status.is_none()
            && self.stage.is_none()
            && self.priority.is_none()
            && self.notes.is_none()
            && self.score.is_none()
            && self.amount.is_none()
            && self.assigned_to.is_none()
    }

    /// Apply every supplied field to `lead` and refresh `updated_at`.
    ///
    /// Does nothing (and returns `false`) for an empty patch.
    pub fn apply(self, lead: &mut Lead, now: DateTime<Utc>) -> bool {
        if self.is_empty() {
            return false;
        }
        set_if_some(&mut lead.name, self.name);
        set_if_some(&mut lead.email, self.email);
        set_if_some(&mut lead.phone, self.phone);
        set_if_some(&mut lead.company, self.company);
        set_if_some(&mut lead.title, self.title);
        set_if_some(&mut lead.source, self.source);
        set_if_some(&mut lead.status, self.status);
        set_if_some(&mut lead.stage, self.stage);
        set_if_some(&mut lead.priority, self.priority);
        set_if_some(&mut lead.notes, self.notes);
        set_if_some(&mut lead.score, self.score.map(clamp_score));
        set_if_some(&mut lead.amount, self.amount);
        set_if_some(&mut lead.assigned_to, self.assigned_to);
        lead.updated_at = now;
        true
    }
}

fn set_if_some<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Clamp a score into the allowed 0..=100 range.
#[must_use]
pub fn clamp_score(score: i64) -> i64 {
    score.clamp(MIN_LEAD_SCORE, MAX_LEAD_SCORE)
}
