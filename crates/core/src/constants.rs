//! Shared constants for leadline.

/// Number of newest leads included in the stats payload.
pub const RECENT_LEADS_IN_STATS: usize = 5;

/// Number of activities returned by the global activity feed.
pub const RECENT_ACTIVITIES_LIMIT: usize = 50;

/// Upper bound for any caller-supplied activity limit.
pub const MAX_ACTIVITIES_LIMIT: usize = 500;

/// Lowest allowed lead score.
pub const MIN_LEAD_SCORE: i64 = 0;

/// Highest allowed lead score.
pub const MAX_LEAD_SCORE: i64 = 100;

/// Default HTTP port when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3001;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "leads.db";

/// Default `SQLite` connection pool size.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
