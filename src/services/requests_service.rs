use sqlx::{PgConnection, PgPool};
use tonic::{Request, Response, Status};

use crate::db::{load_request_detail, load_request_details, record_log, LogEntry};
use crate::error::{AppError, AppResult};
use crate::middleware::{authenticated_user, AuthenticatedUser};
use crate::models::{
    check_fulfilment, AssetStatus, Decision, LogCategory, RequestModel, RequestStatus, RequestType,
    StockLine, REQUEST_COLUMNS,
};
use crate::proto::common::Empty;
use crate::proto::requests::requests_service_server::RequestsService;
use crate::proto::requests::{
    CloseRequestReq, GetRequestReq, ListRequestsReq, ListRequestsRes, Request as RequestMessage,
};
use crate::validation::{optional_text, FieldErrors};

const COMMENT_MAX: usize = 500;

pub struct RequestsServiceImpl {
    pool: PgPool,
}

async fn lock_request(conn: &mut PgConnection, id: i64) -> AppResult<RequestModel> {
    sqlx::query_as(&format!(
        "SELECT {} FROM requests WHERE id = $1 FOR UPDATE",
        REQUEST_COLUMNS
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?
    .ok_or_else(|| AppError::not_found("Request"))
}

fn current_status(request: &RequestModel) -> AppResult<RequestStatus> {
    request.status().map_err(|_| {
        AppError::Internal(format!(
            "Request {} has unknown status '{}'",
            request.id, request.status
        ))
    })
}

/// Turns every requested line into loans or disbursements and takes the
/// stock out of inventory. Nothing is written unless every line can be served.
async fn fulfil_request(
    conn: &mut PgConnection,
    user: &AuthenticatedUser,
    request: &RequestModel,
) -> AppResult<()> {
    let lines: Vec<StockLine> = sqlx::query_as(
        "SELECT ri.item_id, i.name AS item_name, i.quantity AS available, ri.asset_id, \
         a.tag AS asset_tag, a.status AS asset_status, ri.quantity, ri.request_type \
         FROM requested_items ri \
         JOIN items i ON i.id = ri.item_id \
         LEFT JOIN assets a ON a.id = ri.asset_id \
         WHERE ri.request_id = $1 ORDER BY ri.id \
         FOR UPDATE OF i",
    )
    .bind(request.id)
    .fetch_all(&mut *conn)
    .await?;

    // Asset lines whose asset has since been deleted
    let orphaned: Vec<String> = sqlx::query_scalar(
        "SELECT i.name FROM requested_items ri JOIN items i ON i.id = ri.item_id \
         WHERE ri.request_id = $1 AND i.has_assets AND ri.asset_id IS NULL",
    )
    .bind(request.id)
    .fetch_all(&mut *conn)
    .await?;

    check_fulfilment(&lines, &orphaned)?;

    for line in &lines {
        let request_type = RequestType::parse(&line.request_type).map_err(|_| {
            AppError::Internal(format!("Unknown request type '{}'", line.request_type))
        })?;

        let taken = sqlx::query(
            "UPDATE items SET quantity = quantity - $1, updated_at = NOW() \
             WHERE id = $2 AND quantity >= $1",
        )
        .bind(line.quantity)
        .bind(line.item_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
        if taken == 0 {
            return Err(AppError::field(&line.item_name, "Insufficient stock."));
        }

        if let Some(asset_id) = line.asset_id {
            let new_status = match request_type {
                RequestType::Loan => AssetStatus::Loaned,
                RequestType::Disbursement => AssetStatus::Disbursed,
            };
            let moved = sqlx::query("UPDATE assets SET status = $1 WHERE id = $2 AND status = $3")
                .bind(new_status.as_str())
                .bind(asset_id)
                .bind(AssetStatus::InStock.as_str())
                .execute(&mut *conn)
                .await?
                .rows_affected();
            if moved == 0 {
                return Err(AppError::field(
                    &line.item_name,
                    format!(
                        "Asset {} is not available.",
                        line.asset_tag.as_deref().unwrap_or("?")
                    ),
                ));
            }
        }

        match request_type {
            RequestType::Loan => {
                sqlx::query(
                    "INSERT INTO loans (request_id, item_id, asset_id, quantity_loaned) \
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(request.id)
                .bind(line.item_id)
                .bind(line.asset_id)
                .bind(line.quantity)
                .execute(&mut *conn)
                .await?;
            }
            RequestType::Disbursement => {
                sqlx::query(
                    "INSERT INTO disbursements (request_id, item_id, asset_id, quantity) \
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(request.id)
                .bind(line.item_id)
                .bind(line.asset_id)
                .bind(line.quantity)
                .execute(&mut *conn)
                .await?;
            }
        }

        let what = match &line.asset_tag {
            Some(tag) => format!("asset {}", tag),
            None => format!("{} x {}", line.quantity, line.item_name),
        };
        record_log(
            &mut *conn,
            LogEntry::new(
                LogCategory::RequestApproval,
                user.user_id,
                format!(
                    "Request {} approved: {} as {}",
                    request.id,
                    what,
                    request_type.as_str()
                ),
            )
            .item(line.item_id, &line.item_name)
            .affected(request.requester_id),
        )
        .await?;
    }

    Ok(())
}

impl RequestsServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies an approve or deny decision to an outstanding request.
    async fn close(
        &self,
        user: &AuthenticatedUser,
        req: CloseRequestReq,
        decision: Decision,
    ) -> AppResult<RequestMessage> {
        let close_comment = optional_text("close_comment", &req.close_comment, COMMENT_MAX)?;
        let mut tx = self.pool.begin().await?;

        let request = lock_request(&mut *tx, req.id).await?;
        let next = current_status(&request)?
            .transition(decision)
            .map_err(AppError::FailedPrecondition)?;

        match decision {
            Decision::Approve => fulfil_request(&mut *tx, user, &request).await?,
            Decision::Deny => {
                record_log(
                    &mut *tx,
                    LogEntry::new(
                        LogCategory::RequestDenial,
                        user.user_id,
                        format!("Request {} denied", request.id),
                    )
                    .affected(request.requester_id),
                )
                .await?;
            }
        }

        // Guarded so a concurrent decision cannot close the request twice
        let closed: Option<RequestModel> = sqlx::query_as(&format!(
            "UPDATE requests SET status = $1, administrator_id = $2, close_comment = $3, \
             date_closed = NOW() \
             WHERE id = $4 AND status = $5 RETURNING {}",
            REQUEST_COLUMNS
        ))
        .bind(next.as_str())
        .bind(user.user_id)
        .bind(&close_comment)
        .bind(request.id)
        .bind(RequestStatus::Outstanding.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let closed = closed.ok_or_else(|| {
            AppError::FailedPrecondition(FieldErrors::single(
                "status",
                "Request has already been closed.",
            ))
        })?;

        let detail = load_request_detail(&mut *tx, &closed).await?;
        tx.commit().await?;

        tracing::info!(
            "Request {} {} by {}",
            closed.id,
            next.as_str(),
            user.username
        );
        Ok(detail)
    }

    async fn cancel(&self, user: &AuthenticatedUser, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let request = lock_request(&mut *tx, id).await?;
        if request.requester_id != user.user_id {
            return Err(AppError::PermissionDenied(
                "Only the requester may cancel a request".to_string(),
            ));
        }
        if current_status(&request)?.is_terminal() {
            return Err(AppError::FailedPrecondition(FieldErrors::single(
                "status",
                "Only outstanding requests can be cancelled.",
            )));
        }

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::RequestCancellation,
                user.user_id,
                format!("Request {} cancelled", request.id),
            )
            .affected(request.requester_id),
        )
        .await?;

        sqlx::query("DELETE FROM requests WHERE id = $1 AND status = $2")
            .bind(request.id)
            .bind(RequestStatus::Outstanding.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn list(
        &self,
        user: &AuthenticatedUser,
        req: ListRequestsReq,
    ) -> AppResult<Vec<RequestMessage>> {
        if req.all_users {
            user.require_staff()?;
        }
        let status = if req.status.trim().is_empty() {
            None
        } else {
            Some(RequestStatus::parse(req.status.trim())?)
        };
        let requester = (!req.all_users).then_some(user.user_id);

        let mut conn = self.pool.acquire().await?;
        let requests: Vec<RequestModel> = sqlx::query_as(&format!(
            "SELECT {} FROM requests \
             WHERE ($1::bigint IS NULL OR requester_id = $1) \
             AND ($2::text IS NULL OR status = $2) \
             ORDER BY date_open DESC",
            REQUEST_COLUMNS
        ))
        .bind(requester)
        .bind(status.map(RequestStatus::as_str))
        .fetch_all(&mut *conn)
        .await?;

        Ok(load_request_details(&mut *conn, &requests).await?)
    }

    async fn get(&self, user: &AuthenticatedUser, id: i64) -> AppResult<RequestMessage> {
        let mut conn = self.pool.acquire().await?;
        let request: RequestModel = sqlx::query_as(&format!(
            "SELECT {} FROM requests WHERE id = $1",
            REQUEST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::not_found("Request"))?;

        if !user.is_staff && request.requester_id != user.user_id {
            return Err(AppError::PermissionDenied(
                "You may only view your own requests".to_string(),
            ));
        }

        Ok(load_request_detail(&mut *conn, &request).await?)
    }
}

#[tonic::async_trait]
impl RequestsService for RequestsServiceImpl {
    async fn list_requests(
        &self,
        request: Request<ListRequestsReq>,
    ) -> Result<Response<ListRequestsRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        let requests = self.list(&auth_user, request.into_inner()).await?;
        Ok(Response::new(ListRequestsRes { requests }))
    }

    async fn get_request(
        &self,
        request: Request<GetRequestReq>,
    ) -> Result<Response<RequestMessage>, Status> {
        let auth_user = authenticated_user(&request)?;
        let detail = self.get(&auth_user, request.into_inner().id).await?;
        Ok(Response::new(detail))
    }

    async fn approve_request(
        &self,
        request: Request<CloseRequestReq>,
    ) -> Result<Response<RequestMessage>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let detail = self
            .close(&auth_user, request.into_inner(), Decision::Approve)
            .await?;
        Ok(Response::new(detail))
    }

    async fn deny_request(
        &self,
        request: Request<CloseRequestReq>,
    ) -> Result<Response<RequestMessage>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let detail = self
            .close(&auth_user, request.into_inner(), Decision::Deny)
            .await?;
        Ok(Response::new(detail))
    }

    async fn cancel_request(
        &self,
        request: Request<GetRequestReq>,
    ) -> Result<Response<Empty>, Status> {
        let auth_user = authenticated_user(&request)?;
        self.cancel(&auth_user, request.into_inner().id).await?;
        Ok(Response::new(Empty {}))
    }
}
