//! Query-string types (Deserialize)

use leadline_core::{
    LeadFilter, LeadStage, LeadStatus, MAX_ACTIVITIES_LIMIT, RECENT_ACTIVITIES_LIMIT, SortColumn,
    SortOrder,
};
use serde::Deserialize;

const fn default_activities_limit() -> usize {
    RECENT_ACTIVITIES_LIMIT
}

/// `GET /api/leads` parameters. Every field is optional and lenient.
#[derive(Debug, Default, Deserialize)]
pub struct LeadListQuery {
    pub status: Option<String>,
    pub stage: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl LeadListQuery {
    /// Build the storage filter.
    ///
    /// Blank values mean "no filter". Returns `None` when a status or stage
    /// filter names a value no lead can have, so the result is simply empty.
    pub fn to_filter(&self) -> Option<LeadFilter> {
        let status = match non_blank(self.status.as_deref()) {
            Some(s) => Some(s.parse::<LeadStatus>().ok()?),
            None => None,
        };
        let stage = match non_blank(self.stage.as_deref()) {
            Some(s) => Some(s.parse::<LeadStage>().ok()?),
            None => None,
        };
        Some(LeadFilter {
            status,
            stage,
            search: non_blank(self.search.as_deref()).map(str::to_owned),
            sort: self.sort.as_deref().map(SortColumn::parse_lenient).unwrap_or_default(),
            order: self.order.as_deref().map(SortOrder::parse_lenient).unwrap_or_default(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct ActivitiesQuery {
    #[serde(default = "default_activities_limit")]
    pub limit: usize,
}

impl ActivitiesQuery {
    /// Cap limit to prevent unbounded queries.
    pub fn capped_limit(&self) -> usize {
        self.limit.min(MAX_ACTIVITIES_LIMIT)
    }
}
