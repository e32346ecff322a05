use leadline_core::{Activity, ActivityFeedItem, format_timestamp, timestamp_now};
use rusqlite::{Connection, params};
use uuid::Uuid;

use super::{Result, Storage, get_conn, log_row_error, parse_timestamp};

impl Storage {
    /// Append an activity for a lead. The type is free-form and not validated.
    ///
    /// # Errors
    /// Returns error if database insert fails, e.g. the lead does not exist.
    pub fn record_activity(
        &self,
        lead_id: &str,
        activity_type: &str,
        description: &str,
    ) -> Result<Activity> {
        let conn = get_conn(&self.pool)?;
        insert_activity(&conn, lead_id, activity_type, description)
    }

    /// Timeline for a lead, newest first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_lead_activities(&self, lead_id: &str) -> Result<Vec<Activity>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, lead_id, type, description, created_at
               FROM activities WHERE lead_id = ?1 ORDER BY created_at DESC, rowid DESC",
        )?;
        let activities = stmt
            .query_map(params![lead_id], Self::row_to_activity)?
            .filter_map(log_row_error)
            .collect();
        Ok(activities)
    }

    /// Most recent activities across all leads, with the lead's name and company.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_recent_activities(&self, limit: usize) -> Result<Vec<ActivityFeedItem>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT a.id, a.lead_id, a.type, a.description, a.created_at, l.name, l.company
               FROM activities a
               LEFT JOIN leads l ON l.id = a.lead_id
               ORDER BY a.created_at DESC, a.rowid DESC
               LIMIT ?1",
        )?;
        let items = stmt
            .query_map(params![limit as i64], |row| {
                Ok(ActivityFeedItem {
                    activity: Self::row_to_activity(row)?,
                    lead_name: row.get(5)?,
                    lead_company: row.get(6)?,
                })
            })?
            .filter_map(log_row_error)
            .collect();
        Ok(items)
    }

    fn row_to_activity(row: &rusqlite::Row<'_>) -> rusqlite::Result<Activity> {
        Ok(Activity {
            id: row.get(0)?,
            lead_id: row.get(1)?,
            activity_type: row.get(2)?,
            description: row.get(3)?,
            created_at: parse_timestamp(row, 4)?,
        })
    }
}

/// Insert on a caller-supplied connection, so it can join an open transaction.
pub(crate) fn insert_activity(
    conn: &Connection,
    lead_id: &str,
    activity_type: &str,
    description: &str,
) -> Result<Activity> {
    let activity = Activity {
        id: Uuid::new_v4().to_string(),
        lead_id: lead_id.to_owned(),
        activity_type: activity_type.to_owned(),
        description: description.to_owned(),
        created_at: timestamp_now(),
    };
    conn.execute(
        "INSERT INTO activities (id, lead_id, type, description, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            activity.id,
            activity.lead_id,
            activity.activity_type,
            activity.description,
            format_timestamp(&activity.created_at),
        ],
    )?;
    tracing::debug!(lead_id, activity_type, "Activity recorded");
    Ok(activity)
}
