//! Storage types shared across modules

use std::collections::BTreeMap;

use leadline_core::Lead;
use serde::{Deserialize, Serialize};

/// Aggregate view of the lead pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct LeadStats {
    /// Number of leads in storage.
    pub total: u64,
    /// Lead count per pipeline stage. Every known stage is present, even at zero.
    pub by_stage: BTreeMap<String, u64>,
    /// Lead count per status. Every known status is present, even at zero.
    pub by_status: BTreeMap<String, u64>,
    /// Sum of `amount` across all leads.
    pub total_amount: f64,
    /// Most recently created leads, newest first.
    pub recent: Vec<Lead>,
}
