use sqlx::{PgConnection, PgPool};
use tonic::{Request, Response, Status};

use crate::db::{load_request_detail, record_log, LogEntry};
use crate::error::{AppError, AppResult};
use crate::middleware::{authenticated_user, AuthenticatedUser};
use crate::models::{
    validate_cart_line, AssetStatus, CartAssetModel, CartItemModel, LogCategory, RequestModel,
    RequestStatus, RequestType, REQUEST_COLUMNS,
};
use crate::proto::cart::cart_service_server::CartService;
use crate::proto::cart::{
    AddAssetReq, AddItemReq, Cart, CartAsset, CartItem, CheckoutReq, RemoveAssetReq,
    RemoveItemReq, UpdateItemReq,
};
use crate::proto::common::Empty;
use crate::proto::requests::Request as RequestMessage;
use crate::validation::optional_text;

const COMMENT_MAX: usize = 500;

const CART_ITEM_SELECT: &str = "SELECT c.id, c.item_id, i.name AS item_name, i.has_assets, \
     c.quantity, c.request_type \
     FROM cart_items c JOIN items i ON i.id = c.item_id";

const CART_ASSET_SELECT: &str = "SELECT c.id, c.asset_id, a.tag AS asset_tag, a.item_id, \
     i.name AS item_name, c.request_type \
     FROM cart_assets c JOIN assets a ON a.id = c.asset_id JOIN items i ON i.id = a.item_id";

pub struct CartServiceImpl {
    pool: PgPool,
}

async fn fetch_cart_item(conn: &mut PgConnection, id: i64) -> Result<CartItemModel, sqlx::Error> {
    sqlx::query_as(&format!("{} WHERE c.id = $1", CART_ITEM_SELECT))
        .bind(id)
        .fetch_one(conn)
        .await
}

async fn fetch_cart_asset(conn: &mut PgConnection, id: i64) -> Result<CartAssetModel, sqlx::Error> {
    sqlx::query_as(&format!("{} WHERE c.id = $1", CART_ASSET_SELECT))
        .bind(id)
        .fetch_one(conn)
        .await
}

impl CartServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn add_item_line(&self, user: &AuthenticatedUser, req: AddItemReq) -> AppResult<CartItem> {
        let (quantity, request_type) = validate_cart_line(&req.quantity, &req.request_type)?;
        let mut conn = self.pool.acquire().await?;

        let item: Option<(String, bool)> =
            sqlx::query_as("SELECT name, has_assets FROM items WHERE id = $1")
                .bind(req.item_id)
                .fetch_optional(&mut *conn)
                .await?;
        let (item_name, has_assets) = item.ok_or_else(|| AppError::not_found("Item"))?;

        if has_assets {
            return Err(AppError::field(
                "item_id",
                format!("Item {} is tracked per asset; add its assets instead.", item_name),
            ));
        }

        // Adding an item already in the cart accumulates its quantity
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO cart_items (owner_id, item_id, quantity, request_type) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (owner_id, item_id) DO UPDATE \
             SET quantity = cart_items.quantity + EXCLUDED.quantity, \
                 request_type = EXCLUDED.request_type \
             RETURNING id",
        )
        .bind(user.user_id)
        .bind(req.item_id)
        .bind(quantity)
        .bind(request_type.as_str())
        .fetch_one(&mut *conn)
        .await?;

        Ok(fetch_cart_item(&mut *conn, id).await?.to_proto())
    }

    async fn update_item_line(
        &self,
        user: &AuthenticatedUser,
        req: UpdateItemReq,
    ) -> AppResult<CartItem> {
        let (quantity, request_type) = validate_cart_line(&req.quantity, &req.request_type)?;
        let mut conn = self.pool.acquire().await?;

        let updated: Option<i64> = sqlx::query_scalar(
            "UPDATE cart_items SET quantity = $1, request_type = $2 \
             WHERE id = $3 AND owner_id = $4 RETURNING id",
        )
        .bind(quantity)
        .bind(request_type.as_str())
        .bind(req.id)
        .bind(user.user_id)
        .fetch_optional(&mut *conn)
        .await?;
        let id = updated.ok_or_else(|| AppError::not_found("Cart item"))?;

        Ok(fetch_cart_item(&mut *conn, id).await?.to_proto())
    }

    async fn add_asset_line(
        &self,
        user: &AuthenticatedUser,
        req: AddAssetReq,
    ) -> AppResult<CartAsset> {
        let request_type = RequestType::parse(&req.request_type)?;
        let mut conn = self.pool.acquire().await?;

        let asset: Option<(String, String)> =
            sqlx::query_as("SELECT tag, status FROM assets WHERE id = $1")
                .bind(req.asset_id)
                .fetch_optional(&mut *conn)
                .await?;
        let (tag, status) = asset.ok_or_else(|| AppError::not_found("Asset"))?;

        if status != AssetStatus::InStock.as_str() {
            return Err(AppError::field(
                "asset_id",
                format!("Asset {} is not available ({}).", tag, status),
            ));
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO cart_assets (owner_id, asset_id, request_type) VALUES ($1, $2, $3) \
             ON CONFLICT (owner_id, asset_id) DO UPDATE SET request_type = EXCLUDED.request_type \
             RETURNING id",
        )
        .bind(user.user_id)
        .bind(req.asset_id)
        .bind(request_type.as_str())
        .fetch_one(&mut *conn)
        .await?;

        Ok(fetch_cart_asset(&mut *conn, id).await?.to_proto())
    }

    /// Turns the caller's cart into a new outstanding request and empties it.
    async fn submit_cart(
        &self,
        user: &AuthenticatedUser,
        req: CheckoutReq,
    ) -> AppResult<RequestMessage> {
        let open_comment = optional_text("open_comment", &req.open_comment, COMMENT_MAX)?;
        let mut tx = self.pool.begin().await?;

        let item_lines: Vec<i64> =
            sqlx::query_scalar("SELECT id FROM cart_items WHERE owner_id = $1 FOR UPDATE")
                .bind(user.user_id)
                .fetch_all(&mut *tx)
                .await?;
        let asset_lines: Vec<i64> =
            sqlx::query_scalar("SELECT id FROM cart_assets WHERE owner_id = $1 FOR UPDATE")
                .bind(user.user_id)
                .fetch_all(&mut *tx)
                .await?;

        if item_lines.is_empty() && asset_lines.is_empty() {
            return Err(AppError::field("cart", "Your cart is empty."));
        }

        let request: RequestModel = sqlx::query_as(&format!(
            "INSERT INTO requests (requester_id, status, open_comment) VALUES ($1, $2, $3) \
             RETURNING {}",
            REQUEST_COLUMNS
        ))
        .bind(user.user_id)
        .bind(RequestStatus::Outstanding.as_str())
        .bind(&open_comment)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO requested_items (request_id, item_id, quantity, request_type) \
             SELECT $1, item_id, quantity, request_type FROM cart_items \
             WHERE owner_id = $2 ORDER BY id",
        )
        .bind(request.id)
        .bind(user.user_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO requested_items (request_id, item_id, asset_id, quantity, request_type) \
             SELECT $1, a.item_id, c.asset_id, 1, c.request_type \
             FROM cart_assets c JOIN assets a ON a.id = c.asset_id \
             WHERE c.owner_id = $2 ORDER BY c.id",
        )
        .bind(request.id)
        .bind(user.user_id)
        .execute(&mut *tx)
        .await?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::RequestCreation,
                user.user_id,
                format!(
                    "Request {} submitted with {} line(s)",
                    request.id,
                    item_lines.len() + asset_lines.len()
                ),
            )
            .affected(user.user_id),
        )
        .await?;

        sqlx::query("DELETE FROM cart_items WHERE owner_id = $1")
            .bind(user.user_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM cart_assets WHERE owner_id = $1")
            .bind(user.user_id)
            .execute(&mut *tx)
            .await?;

        let detail = load_request_detail(&mut *tx, &request).await?;
        tx.commit().await?;

        tracing::info!(
            "Request {} submitted by {} with {} line(s)",
            request.id,
            user.username,
            item_lines.len() + asset_lines.len()
        );
        Ok(detail)
    }
}

#[tonic::async_trait]
impl CartService for CartServiceImpl {
    async fn get_cart(&self, request: Request<Empty>) -> Result<Response<Cart>, Status> {
        let auth_user = authenticated_user(&request)?;

        let items: Vec<CartItemModel> =
            sqlx::query_as(&format!("{} WHERE c.owner_id = $1 ORDER BY c.id", CART_ITEM_SELECT))
                .bind(auth_user.user_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        let assets: Vec<CartAssetModel> =
            sqlx::query_as(&format!("{} WHERE c.owner_id = $1 ORDER BY c.id", CART_ASSET_SELECT))
                .bind(auth_user.user_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        Ok(Response::new(Cart {
            items: items.iter().map(CartItemModel::to_proto).collect(),
            assets: assets.iter().map(CartAssetModel::to_proto).collect(),
        }))
    }

    async fn add_item(&self, request: Request<AddItemReq>) -> Result<Response<CartItem>, Status> {
        let auth_user = authenticated_user(&request)?;
        let line = self.add_item_line(&auth_user, request.into_inner()).await?;
        Ok(Response::new(line))
    }

    async fn update_item(
        &self,
        request: Request<UpdateItemReq>,
    ) -> Result<Response<CartItem>, Status> {
        let auth_user = authenticated_user(&request)?;
        let line = self.update_item_line(&auth_user, request.into_inner()).await?;
        Ok(Response::new(line))
    }

    async fn remove_item(
        &self,
        request: Request<RemoveItemReq>,
    ) -> Result<Response<Empty>, Status> {
        let auth_user = authenticated_user(&request)?;
        let req = request.into_inner();

        let rows_affected = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND owner_id = $2")
            .bind(req.id)
            .bind(auth_user.user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?
            .rows_affected();

        if rows_affected == 0 {
            return Err(Status::not_found("Cart item not found"));
        }
        Ok(Response::new(Empty {}))
    }

    async fn add_asset(
        &self,
        request: Request<AddAssetReq>,
    ) -> Result<Response<CartAsset>, Status> {
        let auth_user = authenticated_user(&request)?;
        let line = self.add_asset_line(&auth_user, request.into_inner()).await?;
        Ok(Response::new(line))
    }

    async fn remove_asset(
        &self,
        request: Request<RemoveAssetReq>,
    ) -> Result<Response<Empty>, Status> {
        let auth_user = authenticated_user(&request)?;
        let req = request.into_inner();

        let rows_affected = sqlx::query("DELETE FROM cart_assets WHERE id = $1 AND owner_id = $2")
            .bind(req.id)
            .bind(auth_user.user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?
            .rows_affected();

        if rows_affected == 0 {
            return Err(Status::not_found("Cart asset not found"));
        }
        Ok(Response::new(Empty {}))
    }

    async fn checkout(
        &self,
        request: Request<CheckoutReq>,
    ) -> Result<Response<RequestMessage>, Status> {
        let auth_user = authenticated_user(&request)?;
        let detail = self.submit_cart(&auth_user, request.into_inner()).await?;
        Ok(Response::new(detail))
    }
}
