use sqlx::PgConnection;

use crate::error::{AppError, AppResult};
use crate::models::{CustomFieldModel, CustomValueRow, FieldType, TypedColumns};

/// The entity a custom value is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOwner {
    Item(i64),
    Asset(i64),
}

impl ValueOwner {
    fn table(self) -> &'static str {
        match self {
            ValueOwner::Item(_) => "custom_values",
            ValueOwner::Asset(_) => "custom_asset_values",
        }
    }

    fn owner_column(self) -> &'static str {
        match self {
            ValueOwner::Item(_) => "item_id",
            ValueOwner::Asset(_) => "asset_id",
        }
    }

    fn id(self) -> i64 {
        match self {
            ValueOwner::Item(id) | ValueOwner::Asset(id) => id,
        }
    }

    /// Asset-tracked fields attach to assets, the others to items.
    pub fn takes_asset_fields(self) -> bool {
        matches!(self, ValueOwner::Asset(_))
    }
}

fn select_values_sql(owner: ValueOwner, extra_filter: &str) -> String {
    format!(
        "SELECT f.id AS field_id, f.name, f.field_type, f.private, \
         v.short_text, v.long_text, v.integer_value, v.float_value \
         FROM custom_fields f \
         LEFT JOIN {table} v ON v.field_id = f.id AND v.{owner} = $1 \
         WHERE f.asset_tracked = $2 {extra} \
         ORDER BY f.name",
        table = owner.table(),
        owner = owner.owner_column(),
        extra = extra_filter,
    )
}

/// Every applicable field with its value (if any) for `owner`.
pub async fn load_values(
    conn: &mut PgConnection,
    owner: ValueOwner,
) -> Result<Vec<CustomValueRow>, sqlx::Error> {
    sqlx::query_as(&select_values_sql(owner, ""))
        .bind(owner.id())
        .bind(owner.takes_asset_fields())
        .fetch_all(conn)
        .await
}

pub async fn find_field_by_name(
    conn: &mut PgConnection,
    name: &str,
) -> Result<Option<CustomFieldModel>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, name, field_type, private, asset_tracked FROM custom_fields WHERE name = $1",
    )
    .bind(name.trim())
    .fetch_optional(conn)
    .await
}

/// Validates `raw` against the field's declared type and stores it in the
/// matching column only.
pub async fn write_value(
    conn: &mut PgConnection,
    owner: ValueOwner,
    field: &CustomFieldModel,
    raw: &str,
) -> AppResult<CustomValueRow> {
    let field_type = field.kind().ok_or_else(|| {
        AppError::field(
            &field.name,
            format!("Field '{}' has an unknown type '{}'.", field.name, field.field_type),
        )
    })?;

    if field.asset_tracked != owner.takes_asset_fields() {
        let expected = if field.asset_tracked { "assets" } else { "items" };
        return Err(AppError::field(
            &field.name,
            format!("Field '{}' applies to {} only.", field.name, expected),
        ));
    }

    let value = field_type.parse_value(&field.name, raw)?;
    let mut columns = TypedColumns::default();
    columns.set(&field.name, field_type, value)?;

    let sql = format!(
        "INSERT INTO {table} (field_id, {owner}, {column}) VALUES ($1, $2, $3) \
         ON CONFLICT (field_id, {owner}) DO UPDATE SET {column} = EXCLUDED.{column}",
        table = owner.table(),
        owner = owner.owner_column(),
        column = field_type.column(),
    );

    let query = sqlx::query(&sql).bind(field.id).bind(owner.id());
    let query = match field_type {
        FieldType::SingleLine => query.bind(columns.short_text),
        FieldType::MultiLine => query.bind(columns.long_text),
        FieldType::Integer => query.bind(columns.integer_value),
        FieldType::Float => query.bind(columns.float_value),
    };
    query.execute(&mut *conn).await?;

    let row: CustomValueRow = sqlx::query_as(&select_values_sql(owner, "AND f.id = $3"))
        .bind(owner.id())
        .bind(owner.takes_asset_fields())
        .bind(field.id)
        .fetch_one(conn)
        .await?;

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_tables() {
        assert_eq!(ValueOwner::Item(1).table(), "custom_values");
        assert_eq!(ValueOwner::Asset(1).table(), "custom_asset_values");
        assert_eq!(ValueOwner::Asset(9).id(), 9);
        assert!(!ValueOwner::Item(1).takes_asset_fields());
    }

    #[test]
    fn test_select_sql_targets_owner_table() {
        let sql = select_values_sql(ValueOwner::Asset(3), "AND f.id = $3");
        assert!(sql.contains("LEFT JOIN custom_asset_values v"));
        assert!(sql.contains("v.asset_id = $1"));
        assert!(sql.contains("AND f.id = $3"));
    }
}
