use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::error::AppResult;
use crate::middleware::authenticated_user;
use crate::models::{LogCategory, LogModel};
use crate::proto::logs::logs_service_server::LogsService;
use crate::proto::logs::{ListLogsReq, ListLogsRes};

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 1000;

pub struct LogsServiceImpl {
    pool: PgPool,
}

/// Non-positive limits fall back to the default; large ones are capped.
fn effective_limit(requested: i64) -> i64 {
    if requested <= 0 {
        DEFAULT_LIMIT
    } else {
        requested.min(MAX_LIMIT)
    }
}

impl LogsServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list(&self, req: ListLogsReq) -> AppResult<Vec<LogModel>> {
        let category = if req.category.trim().is_empty() {
            None
        } else {
            Some(LogCategory::parse(&req.category)?)
        };
        let item_filter = (req.item_id != 0).then_some(req.item_id);
        let user_filter = (req.user_id != 0).then_some(req.user_id);

        // A user filter matches either side of the entry
        let logs = sqlx::query_as::<_, LogModel>(
            "SELECT id, category, item_id, item_name, initiating_user_id, affected_user_id, \
             message, created_at FROM logs \
             WHERE ($1::text IS NULL OR category = $1) \
             AND ($2::bigint IS NULL OR item_id = $2) \
             AND ($3::bigint IS NULL OR initiating_user_id = $3 OR affected_user_id = $3) \
             ORDER BY created_at DESC, id DESC LIMIT $4",
        )
        .bind(category.map(LogCategory::as_str))
        .bind(item_filter)
        .bind(user_filter)
        .bind(effective_limit(req.limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}

#[tonic::async_trait]
impl LogsService for LogsServiceImpl {
    async fn list_logs(
        &self,
        request: Request<ListLogsReq>,
    ) -> Result<Response<ListLogsRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;

        let logs = self.list(request.into_inner()).await?;
        Ok(Response::new(ListLogsRes {
            logs: logs.iter().map(LogModel::to_proto).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit() {
        assert_eq!(effective_limit(0), DEFAULT_LIMIT);
        assert_eq!(effective_limit(-5), DEFAULT_LIMIT);
        assert_eq!(effective_limit(25), 25);
        assert_eq!(effective_limit(50_000), MAX_LIMIT);
    }
}
