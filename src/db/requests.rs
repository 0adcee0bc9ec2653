use std::collections::HashMap;

use sqlx::PgConnection;

use crate::db::find_users;
use crate::models::{RequestModel, RequestedItemModel};
use crate::proto::common::User;
use crate::proto::requests::Request;

const REQUESTED_ITEM_COLUMNS: &str = "ri.id, ri.request_id, ri.item_id, i.name AS item_name, \
     ri.asset_id, ri.quantity, ri.request_type";

/// Assembles full request messages: requester, administrator and lines.
pub async fn load_request_details(
    conn: &mut PgConnection,
    requests: &[RequestModel],
) -> Result<Vec<Request>, sqlx::Error> {
    if requests.is_empty() {
        return Ok(Vec::new());
    }

    let request_ids: Vec<i64> = requests.iter().map(|r| r.id).collect();
    let mut user_ids: Vec<i64> = requests
        .iter()
        .flat_map(|r| std::iter::once(r.requester_id).chain(r.administrator_id))
        .collect();
    user_ids.sort_unstable();
    user_ids.dedup();

    let users: HashMap<i64, User> = find_users(&mut *conn, &user_ids)
        .await?
        .iter()
        .map(|u| (u.id, u.to_proto()))
        .collect();

    let lines: Vec<RequestedItemModel> = sqlx::query_as(&format!(
        "SELECT {} FROM requested_items ri JOIN items i ON i.id = ri.item_id \
         WHERE ri.request_id = ANY($1) ORDER BY ri.id",
        REQUESTED_ITEM_COLUMNS
    ))
    .bind(&request_ids)
    .fetch_all(&mut *conn)
    .await?;

    let mut lines_by_request: HashMap<i64, Vec<_>> = HashMap::new();
    for line in &lines {
        lines_by_request
            .entry(line.request_id)
            .or_default()
            .push(line.to_proto());
    }

    Ok(requests
        .iter()
        .map(|r| {
            r.to_proto(
                users.get(&r.requester_id).cloned(),
                r.administrator_id.and_then(|id| users.get(&id).cloned()),
                lines_by_request.remove(&r.id).unwrap_or_default(),
            )
        })
        .collect())
}

pub async fn load_request_detail(
    conn: &mut PgConnection,
    request: &RequestModel,
) -> Result<Request, sqlx::Error> {
    let mut details = load_request_details(conn, std::slice::from_ref(request)).await?;
    details.pop().ok_or(sqlx::Error::RowNotFound)
}
