use leadline_core::{Message, format_timestamp};
use rusqlite::params;

use super::{
    Result, Storage, get_conn, log_row_error, parse_column, parse_json_column, parse_timestamp,
};

impl Storage {
    /// Save a conversation turn.
    ///
    /// # Errors
    /// Returns error if database insert fails, e.g. `lead_id` references no lead.
    pub fn insert_message(&self, message: &Message) -> Result<()> {
        let conn = get_conn(&self.pool)?;
        let metadata = message.metadata.as_ref().map(serde_json::to_string).transpose()?;
        conn.execute(
            "INSERT INTO messages (id, lead_id, role, text, metadata, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                message.id,
                message.lead_id,
                message.role.as_str(),
                message.text,
                metadata,
                format_timestamp(&message.created_at),
            ],
        )?;
        Ok(())
    }

    /// Conversation for a lead, oldest first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_lead_messages(&self, lead_id: &str) -> Result<Vec<Message>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, lead_id, role, text, metadata, created_at
               FROM messages WHERE lead_id = ?1 ORDER BY created_at ASC, rowid ASC",
        )?;
        let messages = stmt
            .query_map(params![lead_id], Self::row_to_message)?
            .filter_map(log_row_error)
            .collect();
        Ok(messages)
    }

    /// Number of stored messages, including ones attached to no lead.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn message_count(&self) -> Result<u64> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn row_to_message(row: &rusqlite::Row<'_>) -> rusqlite::Result<Message> {
        Ok(Message {
            id: row.get(0)?,
            lead_id: row.get(1)?,
            role: parse_column(row, 2)?,
            text: row.get(3)?,
            metadata: parse_json_column(row, 4)?,
            created_at: parse_timestamp(row, 5)?,
        })
    }
}
