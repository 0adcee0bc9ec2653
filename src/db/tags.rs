use std::collections::HashMap;

use sqlx::PgConnection;

use crate::models::TagModel;
use crate::proto::common::Tag;

/// Replaces the tag set of an item, creating missing tags on the way.
pub async fn set_item_tags(
    conn: &mut PgConnection,
    item_id: i64,
    tags: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM item_tags WHERE item_id = $1")
        .bind(item_id)
        .execute(&mut *conn)
        .await?;

    if tags.is_empty() {
        return Ok(());
    }

    sqlx::query("INSERT INTO tags (name) SELECT UNNEST($1::text[]) ON CONFLICT (name) DO NOTHING")
        .bind(tags)
        .execute(&mut *conn)
        .await?;

    sqlx::query(
        "INSERT INTO item_tags (item_id, tag_id) \
         SELECT $1, id FROM tags WHERE name = ANY($2) \
         ON CONFLICT DO NOTHING",
    )
    .bind(item_id)
    .bind(tags)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

pub async fn load_tags(conn: &mut PgConnection, item_id: i64) -> Result<Vec<Tag>, sqlx::Error> {
    let tags: Vec<TagModel> = sqlx::query_as(
        "SELECT t.id, t.name FROM tags t JOIN item_tags it ON it.tag_id = t.id \
         WHERE it.item_id = $1 ORDER BY t.name",
    )
    .bind(item_id)
    .fetch_all(conn)
    .await?;

    Ok(tags.iter().map(TagModel::to_proto).collect())
}

/// Tags of several items in one query, keyed by item id.
pub async fn load_tags_for_items(
    conn: &mut PgConnection,
    item_ids: &[i64],
) -> Result<HashMap<i64, Vec<Tag>>, sqlx::Error> {
    let rows: Vec<(i64, i64, String)> = sqlx::query_as(
        "SELECT it.item_id, t.id, t.name FROM tags t JOIN item_tags it ON it.tag_id = t.id \
         WHERE it.item_id = ANY($1) ORDER BY t.name",
    )
    .bind(item_ids)
    .fetch_all(conn)
    .await?;

    let mut by_item: HashMap<i64, Vec<Tag>> = HashMap::new();
    for (item_id, id, name) in rows {
        by_item.entry(item_id).or_default().push(Tag { id, name });
    }
    Ok(by_item)
}
