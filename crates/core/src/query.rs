//! Listing filters and the sort allow-list.

use serde::{Deserialize, Serialize};

use crate::pipeline::{LeadStage, LeadStatus};

/// Columns leads may be sorted by. Anything else falls back to `CreatedAt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    #[default]
    CreatedAt,
    UpdatedAt,
    Score,
    Amount,
    Status,
    Stage,
}

impl SortColumn {
    /// Resolve a caller-supplied column name. Unknown names fall back to `created_at`.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "name" => Self::Name,
            "updated_at" => Self::UpdatedAt,
            "score" => Self::Score,
            "amount" => Self::Amount,
            "status" => Self::Status,
            "stage" => Self::Stage,
            _ => Self::CreatedAt,
        }
    }

    /// Column name as it appears in the `leads` table.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match *self {
            Self::Name => "name",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Score => "score",
            Self::Amount => "amount",
            Self::Status => "status",
            Self::Stage => "stage",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Case-insensitive; anything other than `asc` means descending.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        if s.eq_ignore_ascii_case("asc") { Self::Asc } else { Self::Desc }
    }

    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match *self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Filters for listing leads. Defaults to everything, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    pub status: Option<LeadStatus>,
    pub stage: Option<LeadStage>,
    /// Case-insensitive substring matched against name, email and company
    pub search: Option<String>,
    pub sort: SortColumn,
    pub order: SortOrder,
}
