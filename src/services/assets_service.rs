use sqlx::{PgConnection, PgPool};
use tonic::{Request, Response, Status};

use crate::db::{load_values, record_log, LogEntry, ValueOwner};
use crate::error::{AppError, AppResult};
use crate::middleware::{authenticated_user, AuthenticatedUser};
use crate::models::{visible_values, AssetModel, AssetStatus, LogCategory, ASSET_COLUMNS};
use crate::proto::assets::assets_service_server::AssetsService;
use crate::proto::assets::{
    Asset, CreateAssetReq, DeleteAssetReq, GetAssetReq, ListAssetsReq, ListAssetsRes,
};
use crate::proto::common::Empty;
use crate::validation::required_text;

const TAG_MAX: usize = 100;

pub struct AssetsServiceImpl {
    pool: PgPool,
}

async fn asset_to_proto(
    conn: &mut PgConnection,
    model: &AssetModel,
    is_staff: bool,
) -> AppResult<Asset> {
    let values = load_values(conn, ValueOwner::Asset(model.id)).await?;
    Ok(model.to_proto(visible_values(&values, is_staff)))
}

impl AssetsServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registers a new in-stock asset; the item's quantity follows.
    async fn create(&self, user: &AuthenticatedUser, req: CreateAssetReq) -> AppResult<Asset> {
        let tag = required_text("tag", &req.tag, TAG_MAX)?;
        let mut tx = self.pool.begin().await?;

        let item: Option<(String, bool)> =
            sqlx::query_as("SELECT name, has_assets FROM items WHERE id = $1 FOR UPDATE")
                .bind(req.item_id)
                .fetch_optional(&mut *tx)
                .await?;
        let (item_name, has_assets) = item.ok_or_else(|| AppError::not_found("Item"))?;

        if !has_assets {
            return Err(AppError::field(
                "item_id",
                format!("Item {} is not tracked per asset.", item_name),
            ));
        }

        let asset_id: Option<i64> = sqlx::query_scalar(
            "INSERT INTO assets (item_id, tag) VALUES ($1, $2) \
             ON CONFLICT (tag) DO NOTHING RETURNING id",
        )
        .bind(req.item_id)
        .bind(&tag)
        .fetch_optional(&mut *tx)
        .await?;
        let asset_id = asset_id
            .ok_or_else(|| AppError::field("tag", "An asset with this tag already exists."))?;

        sqlx::query("UPDATE items SET quantity = quantity + 1, updated_at = NOW() WHERE id = $1")
            .bind(req.item_id)
            .execute(&mut *tx)
            .await?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::ItemModification,
                user.user_id,
                format!("Asset {} added to {}", tag, item_name),
            )
            .item(req.item_id, &item_name),
        )
        .await?;

        let model: AssetModel = sqlx::query_as(&format!(
            "SELECT {} FROM assets a JOIN items i ON i.id = a.item_id WHERE a.id = $1",
            ASSET_COLUMNS
        ))
        .bind(asset_id)
        .fetch_one(&mut *tx)
        .await?;

        let asset = asset_to_proto(&mut *tx, &model, user.is_staff).await?;
        tx.commit().await?;
        Ok(asset)
    }

    async fn delete(&self, user: &AuthenticatedUser, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let model: AssetModel = sqlx::query_as(&format!(
            "SELECT {} FROM assets a JOIN items i ON i.id = a.item_id WHERE a.id = $1 FOR UPDATE OF a, i",
            ASSET_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found("Asset"))?;
        model.check_deletable().map_err(AppError::FailedPrecondition)?;

        sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE items SET quantity = quantity - 1, updated_at = NOW() \
             WHERE id = $1 AND quantity > 0",
        )
        .bind(model.item_id)
        .execute(&mut *tx)
        .await?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::ItemModification,
                user.user_id,
                format!("Asset {} removed from {}", model.tag, model.item_name),
            )
            .item(model.item_id, &model.item_name),
        )
        .await?;

        tx.commit().await?;
        Ok(())
    }
}

#[tonic::async_trait]
impl AssetsService for AssetsServiceImpl {
    async fn create_asset(
        &self,
        request: Request<CreateAssetReq>,
    ) -> Result<Response<Asset>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let asset = self.create(&auth_user, request.into_inner()).await?;
        Ok(Response::new(asset))
    }

    async fn get_asset(&self, request: Request<GetAssetReq>) -> Result<Response<Asset>, Status> {
        let auth_user = authenticated_user(&request)?;
        let req = request.into_inner();

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| Status::internal(format!("Database connection error: {}", e)))?;

        let model: Option<AssetModel> = sqlx::query_as(&format!(
            "SELECT {} FROM assets a JOIN items i ON i.id = a.item_id WHERE a.id = $1",
            ASSET_COLUMNS
        ))
        .bind(req.id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        match model {
            Some(m) => Ok(Response::new(
                asset_to_proto(&mut *conn, &m, auth_user.is_staff).await?,
            )),
            None => Err(Status::not_found("Asset not found")),
        }
    }

    async fn list_assets(
        &self,
        request: Request<ListAssetsReq>,
    ) -> Result<Response<ListAssetsRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        let req = request.into_inner();

        let status = if req.status.trim().is_empty() {
            None
        } else {
            Some(AssetStatus::parse(&req.status).map_err(AppError::from)?)
        };

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| Status::internal(format!("Database connection error: {}", e)))?;

        let models: Vec<AssetModel> = sqlx::query_as(&format!(
            "SELECT {} FROM assets a JOIN items i ON i.id = a.item_id \
             WHERE a.item_id = $1 AND ($2::text IS NULL OR a.status = $2) \
             ORDER BY a.tag",
            ASSET_COLUMNS
        ))
        .bind(req.item_id)
        .bind(status.map(AssetStatus::as_str))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        let mut assets = Vec::with_capacity(models.len());
        for model in &models {
            assets.push(asset_to_proto(&mut *conn, model, auth_user.is_staff).await?);
        }

        Ok(Response::new(ListAssetsRes { assets }))
    }

    async fn delete_asset(
        &self,
        request: Request<DeleteAssetReq>,
    ) -> Result<Response<Empty>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        self.delete(&auth_user, request.into_inner().id).await?;
        Ok(Response::new(Empty {}))
    }
}
