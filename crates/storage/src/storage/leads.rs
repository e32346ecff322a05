use chrono::{DateTime, Utc};
use leadline_core::{Activity, Lead, LeadFilter, LeadPatch, format_timestamp};
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, TransactionBehavior, params, params_from_iter};

use super::activities::insert_activity;
use super::{
    Result, Storage, escape_like_pattern, get_conn, log_row_error, parse_column, parse_timestamp,
};

pub(crate) const LEAD_COLUMNS: &str = "id, name, email, phone, company, title, source, status, \
     stage, priority, notes, score, amount, assigned_to, created_at, updated_at";

impl Storage {
    /// Insert a new lead.
    ///
    /// # Errors
    /// Returns error if database insert fails (including a duplicate id).
    pub fn insert_lead(&self, lead: &Lead) -> Result<()> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            &format!(
                "INSERT INTO leads ({LEAD_COLUMNS})
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"
            ),
            params![
                lead.id,
                lead.name,
                lead.email,
                lead.phone,
                lead.company,
                lead.title,
                lead.source.as_str(),
                lead.status.as_str(),
                lead.stage.as_str(),
                lead.priority.as_str(),
                lead.notes,
                lead.score,
                lead.amount,
                lead.assigned_to,
                format_timestamp(&lead.created_at),
                format_timestamp(&lead.updated_at),
            ],
        )?;
        Ok(())
    }

    /// Get lead by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_lead(&self, id: &str) -> Result<Option<Lead>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!("SELECT {LEAD_COLUMNS} FROM leads WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Self::row_to_lead(row)?))
        } else {
            Ok(None)
        }
    }

    /// Whether a lead with this ID exists.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn lead_exists(&self, id: &str) -> Result<bool> {
        let conn = get_conn(&self.pool)?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM leads WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// List leads matching `filter`, ordered by its sort column.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_leads(&self, filter: &LeadFilter) -> Result<Vec<Lead>> {
        let conn = get_conn(&self.pool)?;

        let mut clauses: Vec<&str> = Vec::new();
        let mut args: Vec<String> = Vec::new();
        if let Some(status) = filter.status {
            clauses.push("status = ?");
            args.push(status.as_str().to_owned());
        }
        if let Some(stage) = filter.stage {
            clauses.push("stage = ?");
            args.push(stage.as_str().to_owned());
        }
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            clauses.push(
                "(name LIKE ? ESCAPE '\\' OR email LIKE ? ESCAPE '\\' \
                 OR company LIKE ? ESCAPE '\\')",
            );
            let pattern = format!("%{}%", escape_like_pattern(search));
            args.extend(std::iter::repeat_n(pattern, 3));
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        // Column and direction come from closed enums, never from caller text.
        let order = filter.order.keyword();
        let sql = format!(
            "SELECT {LEAD_COLUMNS} FROM leads{where_sql} ORDER BY {} {order}, rowid {order}",
            filter.sort.column()
        );

        let mut stmt = conn.prepare(&sql)?;
        let leads = stmt
            .query_map(params_from_iter(args.iter()), Self::row_to_lead)?
            .filter_map(log_row_error)
            .collect();
        Ok(leads)
    }

    /// Apply `patch` to a lead and append the activities `transitions`
    /// derives from the before/after pair.
    ///
    /// The read, the column-targeted `UPDATE` and the activity inserts run in
    /// one `BEGIN IMMEDIATE` transaction, so concurrent patches serialize and
    /// each one compares against the row as it really was. An empty patch
    /// returns the stored lead and writes nothing. Returns `None` if no lead
    /// has this ID.
    ///
    /// # Errors
    /// Returns error if any statement fails; nothing is written in that case.
    pub fn patch_lead<F>(
        &self,
        id: &str,
        patch: LeadPatch,
        now: DateTime<Utc>,
        transitions: F,
    ) -> Result<Option<(Lead, Vec<Activity>)>>
    where
        F: FnOnce(&Lead, &Lead) -> Vec<(&'static str, String)>,
    {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let Some(before) = tx
            .query_row(
                &format!("SELECT {LEAD_COLUMNS} FROM leads WHERE id = ?1"),
                params![id],
                Self::row_to_lead,
            )
            .optional()?
        else {
            return Ok(None);
        };

        let mut after = before.clone();
        let assignments_for = patch.clone();
        if !patch.apply(&mut after, now) {
            return Ok(Some((before, Vec::new())));
        }

        let assignments = patch_assignments(&assignments_for, &after);
        let set_sql: Vec<String> =
            assignments.iter().map(|(column, _)| format!("{column} = ?")).collect();
        let mut args: Vec<Value> = assignments.into_iter().map(|(_, value)| value).collect();
        args.push(Value::Text(format_timestamp(&after.updated_at)));
        args.push(Value::Text(id.to_owned()));
        tx.execute(
            &format!("UPDATE leads SET {}, updated_at = ? WHERE id = ?", set_sql.join(", ")),
            params_from_iter(args.iter()),
        )?;

        let activities = transitions(&before, &after)
            .into_iter()
            .map(|(activity_type, description)| {
                insert_activity(&tx, id, activity_type, &description)
            })
            .collect::<Result<Vec<_>>>()?;

        tx.commit()?;
        Ok(Some((after, activities)))
    }

    /// Delete a lead; its messages and activities go with it.
    /// Returns `false` if no lead has this ID.
    ///
    /// # Errors
    /// Returns error if database delete fails.
    pub fn delete_lead(&self, id: &str) -> Result<bool> {
        let conn = get_conn(&self.pool)?;
        let affected = conn.execute("DELETE FROM leads WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    pub(crate) fn row_to_lead(row: &rusqlite::Row<'_>) -> rusqlite::Result<Lead> {
        Ok(Lead {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            company: row.get(4)?,
            title: row.get(5)?,
            source: parse_column(row, 6)?,
            status: parse_column(row, 7)?,
            stage: parse_column(row, 8)?,
            priority: parse_column(row, 9)?,
            notes: row.get(10)?,
            score: row.get(11)?,
            amount: row.get(12)?,
            assigned_to: row.get(13)?,
            created_at: parse_timestamp(row, 14)?,
            updated_at: parse_timestamp(row, 15)?,
        })
    }
}

/// Column/value pairs for the fields `patch` supplies, read from the patched lead
/// so clamping and defaults already applied are what gets stored.
fn patch_assignments(patch: &LeadPatch, lead: &Lead) -> Vec<(&'static str, Value)> {
    let text = |v: &Option<String>| v.clone().map_or(Value::Null, Value::Text);
    let candidates = [
        (patch.name.is_some(), "name", text(&lead.name)),
        (patch.email.is_some(), "email", text(&lead.email)),
        (patch.phone.is_some(), "phone", text(&lead.phone)),
        (patch.company.is_some(), "company", text(&lead.company)),
        (patch.title.is_some(), "title", text(&lead.title)),
        (patch.source.is_some(), "source", Value::Text(lead.source.as_str().to_owned())),
        (patch.status.is_some(), "status", Value::Text(lead.status.as_str().to_owned())),
        (patch.stage.is_some(), "stage", Value::Text(lead.stage.as_str().to_owned())),
        (patch.priority.is_some(), "priority", Value::Text(lead.priority.as_str().to_owned())),
        (patch.notes.is_some(), "notes", text(&lead.notes)),
        (patch.score.is_some(), "score", Value::Integer(lead.score)),
        (patch.amount.is_some(), "amount", Value::Real(lead.amount)),
        (patch.assigned_to.is_some(), "assigned_to", text(&lead.assigned_to)),
    ];
    candidates
        .into_iter()
        .filter(|(supplied, ..)| *supplied)
        .map(|(_, column, value)| (column, value))
        .collect()
}
