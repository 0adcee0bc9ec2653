use sqlx::PgConnection;

use crate::models::LogCategory;

/// One audit record. Item and users are optional references that survive
/// deletion of their target as NULL.
#[derive(Debug, Clone)]
pub struct LogEntry<'a> {
    pub category: LogCategory,
    pub item: Option<(i64, &'a str)>,
    pub initiating_user: Option<i64>,
    pub affected_user: Option<i64>,
    pub message: String,
}

impl<'a> LogEntry<'a> {
    pub fn new(category: LogCategory, initiating_user: i64, message: impl Into<String>) -> Self {
        Self {
            category,
            item: None,
            initiating_user: Some(initiating_user),
            affected_user: None,
            message: message.into(),
        }
    }

    pub fn item(mut self, id: i64, name: &'a str) -> Self {
        self.item = Some((id, name));
        self
    }

    pub fn affected(mut self, user_id: i64) -> Self {
        self.affected_user = Some(user_id);
        self
    }
}

/// Appends an audit row. Call with the transaction of the change it records.
pub async fn record_log(conn: &mut PgConnection, entry: LogEntry<'_>) -> Result<(), sqlx::Error> {
    let (item_id, item_name) = match entry.item {
        Some((id, name)) => (Some(id), name),
        None => (None, ""),
    };

    sqlx::query(
        "INSERT INTO logs (category, item_id, item_name, initiating_user_id, affected_user_id, message) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(entry.category.as_str())
    .bind(item_id)
    .bind(item_name)
    .bind(entry.initiating_user)
    .bind(entry.affected_user)
    .bind(&entry.message)
    .execute(conn)
    .await?;

    tracing::debug!("Audit [{}] {}", entry.category.as_str(), entry.message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_builder() {
        let entry = LogEntry::new(LogCategory::ItemCreation, 1, "created")
            .item(5, "Resistor")
            .affected(2);
        assert_eq!(entry.item, Some((5, "Resistor")));
        assert_eq!(entry.initiating_user, Some(1));
        assert_eq!(entry.affected_user, Some(2));
        assert_eq!(entry.message, "created");
    }
}
