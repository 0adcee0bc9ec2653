use sqlx::{PgConnection, PgPool};
use tonic::{Request, Response, Status};

use crate::db::{record_log, LogEntry};
use crate::error::{AppError, AppResult};
use crate::middleware::{authenticated_user, AuthenticatedUser};
use crate::models::{
    AssetStatus, DisbursementModel, LoanChange, LoanModel, LoanOutcome, LogCategory,
    DISBURSEMENT_COLUMNS, LOAN_COLUMNS,
};
use crate::proto::loans::loans_service_server::LoansService;
use crate::proto::loans::{
    ConvertLoanRes, ListDisbursementsRes, ListLoansRes, ListReq, LoanQuantityReq, ReturnLoanRes,
};

const LOAN_FROM: &str =
    "FROM loans l JOIN items i ON i.id = l.item_id JOIN requests r ON r.id = l.request_id";

const DISBURSEMENT_FROM: &str = "FROM disbursements d JOIN items i ON i.id = d.item_id \
     JOIN requests r ON r.id = d.request_id";

pub struct LoansServiceImpl {
    pool: PgPool,
}

/// Resolves whose records a list call may see. Non-staff only see their own.
fn list_scope(user: &AuthenticatedUser, requested_user: i64) -> AppResult<Option<i64>> {
    match (user.is_staff, requested_user) {
        (true, 0) => Ok(None),
        (true, id) => Ok(Some(id)),
        (false, 0) => Ok(Some(user.user_id)),
        (false, id) if id == user.user_id => Ok(Some(id)),
        (false, _) => Err(AppError::PermissionDenied(
            "You may only list your own records".to_string(),
        )),
    }
}

async fn lock_loan(conn: &mut PgConnection, id: i64) -> AppResult<LoanModel> {
    sqlx::query_as(&format!(
        "SELECT {} {} WHERE l.id = $1 FOR UPDATE OF l",
        LOAN_COLUMNS, LOAN_FROM
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?
    .ok_or_else(|| AppError::not_found("Loan"))
}

/// Persists the loan counters after a change, or removes the loan once
/// nothing is left on it.
async fn apply_loan_change(
    conn: &mut PgConnection,
    loan: &LoanModel,
    change: &LoanChange,
) -> AppResult<Option<LoanModel>> {
    match change.outcome {
        LoanOutcome::Exhausted => {
            sqlx::query("DELETE FROM loans WHERE id = $1")
                .bind(loan.id)
                .execute(&mut *conn)
                .await?;
            Ok(None)
        }
        LoanOutcome::Remaining {
            quantity_loaned,
            quantity_returned,
        } => {
            sqlx::query(
                "UPDATE loans SET quantity_loaned = $1, quantity_returned = $2 WHERE id = $3",
            )
            .bind(quantity_loaned)
            .bind(quantity_returned)
            .bind(loan.id)
            .execute(&mut *conn)
            .await?;
            Ok(Some(LoanModel {
                quantity_loaned,
                quantity_returned,
                ..loan.clone()
            }))
        }
    }
}

impl LoansServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn record_return(
        &self,
        user: &AuthenticatedUser,
        req: LoanQuantityReq,
    ) -> AppResult<Option<LoanModel>> {
        let mut tx = self.pool.begin().await?;

        let loan = lock_loan(&mut *tx, req.loan_id).await?;
        let change = loan.plan_return(&req.quantity)?;

        // Returned stock goes back on the shelf
        sqlx::query(
            "UPDATE items SET quantity = quantity + $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(change.quantity)
        .bind(loan.item_id)
        .execute(&mut *tx)
        .await?;

        if let Some(asset_id) = loan.asset_id {
            sqlx::query("UPDATE assets SET status = $1 WHERE id = $2")
                .bind(AssetStatus::InStock.as_str())
                .bind(asset_id)
                .execute(&mut *tx)
                .await?;
        }

        let remaining = apply_loan_change(&mut *tx, &loan, &change).await?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::LoanReturn,
                user.user_id,
                format!(
                    "{} x {} returned on loan {} (request {})",
                    change.quantity, loan.item_name, loan.id, loan.request_id
                ),
            )
            .item(loan.item_id, &loan.item_name)
            .affected(loan.user_id),
        )
        .await?;

        tx.commit().await?;
        Ok(remaining)
    }

    async fn record_conversion(
        &self,
        user: &AuthenticatedUser,
        req: LoanQuantityReq,
    ) -> AppResult<(DisbursementModel, Option<LoanModel>)> {
        let mut tx = self.pool.begin().await?;

        let loan = lock_loan(&mut *tx, req.loan_id).await?;
        let change = loan.plan_conversion(&req.quantity)?;

        let disbursement_id: i64 = sqlx::query_scalar(
            "INSERT INTO disbursements (request_id, item_id, asset_id, quantity) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(loan.request_id)
        .bind(loan.item_id)
        .bind(loan.asset_id)
        .bind(change.quantity)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(asset_id) = loan.asset_id {
            sqlx::query("UPDATE assets SET status = $1 WHERE id = $2")
                .bind(AssetStatus::Disbursed.as_str())
                .bind(asset_id)
                .execute(&mut *tx)
                .await?;
        }

        let remaining = apply_loan_change(&mut *tx, &loan, &change).await?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::LoanConversion,
                user.user_id,
                format!(
                    "{} x {} converted from loan {} to disbursement {}",
                    change.quantity, loan.item_name, loan.id, disbursement_id
                ),
            )
            .item(loan.item_id, &loan.item_name)
            .affected(loan.user_id),
        )
        .await?;

        let disbursement: DisbursementModel = sqlx::query_as(&format!(
            "SELECT {} {} WHERE d.id = $1",
            DISBURSEMENT_COLUMNS, DISBURSEMENT_FROM
        ))
        .bind(disbursement_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((disbursement, remaining))
    }
}

#[tonic::async_trait]
impl LoansService for LoansServiceImpl {
    async fn list_loans(&self, request: Request<ListReq>) -> Result<Response<ListLoansRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        let req = request.into_inner();
        let user_filter = list_scope(&auth_user, req.user_id)?;
        let item_filter = (req.item_id != 0).then_some(req.item_id);

        let loans: Vec<LoanModel> = sqlx::query_as(&format!(
            "SELECT {} {} \
             WHERE ($1::bigint IS NULL OR r.requester_id = $1) \
             AND ($2::bigint IS NULL OR l.item_id = $2) \
             ORDER BY l.date_loaned DESC",
            LOAN_COLUMNS, LOAN_FROM
        ))
        .bind(user_filter)
        .bind(item_filter)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        Ok(Response::new(ListLoansRes {
            loans: loans.iter().map(LoanModel::to_proto).collect(),
        }))
    }

    async fn list_disbursements(
        &self,
        request: Request<ListReq>,
    ) -> Result<Response<ListDisbursementsRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        let req = request.into_inner();
        let user_filter = list_scope(&auth_user, req.user_id)?;
        let item_filter = (req.item_id != 0).then_some(req.item_id);

        let disbursements: Vec<DisbursementModel> = sqlx::query_as(&format!(
            "SELECT {} {} \
             WHERE ($1::bigint IS NULL OR r.requester_id = $1) \
             AND ($2::bigint IS NULL OR d.item_id = $2) \
             ORDER BY d.date_created DESC",
            DISBURSEMENT_COLUMNS, DISBURSEMENT_FROM
        ))
        .bind(user_filter)
        .bind(item_filter)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        Ok(Response::new(ListDisbursementsRes {
            disbursements: disbursements
                .iter()
                .map(DisbursementModel::to_proto)
                .collect(),
        }))
    }

    async fn return_loan(
        &self,
        request: Request<LoanQuantityReq>,
    ) -> Result<Response<ReturnLoanRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let remaining = self.record_return(&auth_user, request.into_inner()).await?;
        Ok(Response::new(ReturnLoanRes {
            loan: remaining.as_ref().map(LoanModel::to_proto),
        }))
    }

    async fn convert_loan(
        &self,
        request: Request<LoanQuantityReq>,
    ) -> Result<Response<ConvertLoanRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let (disbursement, remaining) =
            self.record_conversion(&auth_user, request.into_inner()).await?;
        Ok(Response::new(ConvertLoanRes {
            disbursement: Some(disbursement.to_proto()),
            loan: remaining.as_ref().map(LoanModel::to_proto),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_staff: bool) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: 4,
            username: "carol".to_string(),
            is_staff,
        }
    }

    #[test]
    fn test_list_scope_for_staff() {
        assert_eq!(list_scope(&user(true), 0).unwrap(), None);
        assert_eq!(list_scope(&user(true), 9).unwrap(), Some(9));
    }

    #[test]
    fn test_list_scope_for_regular_user() {
        assert_eq!(list_scope(&user(false), 0).unwrap(), Some(4));
        assert_eq!(list_scope(&user(false), 4).unwrap(), Some(4));
        assert!(matches!(
            list_scope(&user(false), 9),
            Err(AppError::PermissionDenied(_))
        ));
    }
}
