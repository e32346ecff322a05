//! Lead classification enums: source, status, pipeline stage and priority.
//!
//! All four are stored and serialized as their kebab-case string form.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Channel a lead arrived through.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LeadSource {
    Website,
    Referral,
    Linkedin,
    ColdOutreach,
    Event,
    /// Captured automatically from the chat widget
    Chat,
    /// Entered by hand in the dashboard
    #[default]
    Manual,
    Other,
}

impl LeadSource {
    pub const ALL: &'static [LeadSource] = &[
        Self::Website,
        Self::Referral,
        Self::Linkedin,
        Self::ColdOutreach,
        Self::Event,
        Self::Chat,
        Self::Manual,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Website => "website",
            Self::Referral => "referral",
            Self::Linkedin => "linkedin",
            Self::ColdOutreach => "cold-outreach",
            Self::Event => "event",
            Self::Chat => "chat",
            Self::Manual => "manual",
            Self::Other => "other",
        }
    }
}

impl FromStr for LeadSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSource(s.to_owned()))
    }
}

/// Engagement health of a lead, independent of its pipeline stage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    #[default]
    New,
    Active,
    Stale,
    Lost,
}

impl LeadStatus {
    pub const ALL: &'static [LeadStatus] = &[Self::New, Self::Active, Self::Stale, Self::Lost];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::New => "new",
            Self::Active => "active",
            Self::Stale => "stale",
            Self::Lost => "lost",
        }
    }
}

impl FromStr for LeadStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::InvalidStatus(s.to_owned()))
    }
}

/// Position of a lead in the sales pipeline.
///
/// The documented flow is inquiry -> qualified -> proposal -> negotiation ->
/// closed-won | closed-lost, but any stage may be set from any other.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStage {
    #[default]
    Inquiry,
    Qualified,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl LeadStage {
    /// Stages in pipeline order.
    pub const ALL: &'static [LeadStage] = &[
        Self::Inquiry,
        Self::Qualified,
        Self::Proposal,
        Self::Negotiation,
        Self::ClosedWon,
        Self::ClosedLost,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Inquiry => "inquiry",
            Self::Qualified => "qualified",
            Self::Proposal => "proposal",
            Self::Negotiation => "negotiation",
            Self::ClosedWon => "closed-won",
            Self::ClosedLost => "closed-lost",
        }
    }
}

impl FromStr for LeadStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::InvalidStage(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LeadPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl LeadPriority {
    pub const ALL: &'static [LeadPriority] = &[Self::Low, Self::Medium, Self::High, Self::Urgent];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl FromStr for LeadPriority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::InvalidPriority(s.to_owned()))
    }
}

impl Display for LeadSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Display for LeadStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Display for LeadPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
