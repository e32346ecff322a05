use std::collections::BTreeMap;

use leadline_core::{LeadStage, LeadStatus, RECENT_LEADS_IN_STATS};
use rusqlite::params;

use super::leads::LEAD_COLUMNS;
use super::{Result, Storage, get_conn, log_row_error};
use crate::types::LeadStats;

impl Storage {
    /// Pipeline totals, per-stage and per-status counts, and the newest leads.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn lead_stats(&self) -> Result<LeadStats> {
        let conn = get_conn(&self.pool)?;

        let (total, total_amount): (i64, f64) = conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(amount), 0.0) FROM leads",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let mut by_stage: BTreeMap<String, u64> =
            LeadStage::ALL.iter().map(|s| (s.as_str().to_owned(), 0)).collect();
        by_stage.extend(Self::grouped_counts(&conn, "stage")?);

        let mut by_status: BTreeMap<String, u64> =
            LeadStatus::ALL.iter().map(|s| (s.as_str().to_owned(), 0)).collect();
        by_status.extend(Self::grouped_counts(&conn, "status")?);

        let mut stmt = conn.prepare(&format!(
            "SELECT {LEAD_COLUMNS} FROM leads ORDER BY created_at DESC, rowid DESC LIMIT ?1"
        ))?;
        let recent = stmt
            .query_map(params![RECENT_LEADS_IN_STATS as i64], Self::row_to_lead)?
            .filter_map(log_row_error)
            .collect();

        Ok(LeadStats {
            total: total as u64,
            by_stage,
            by_status,
            total_amount,
            recent,
        })
    }

    /// `column` is one of our own column names, never caller input.
    fn grouped_counts(conn: &rusqlite::Connection, column: &str) -> Result<Vec<(String, u64)>> {
        let mut stmt =
            conn.prepare(&format!("SELECT {column}, COUNT(*) FROM leads GROUP BY {column}"))?;
        let counts = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64)))?
            .filter_map(log_row_error)
            .collect();
        Ok(counts)
    }
}
