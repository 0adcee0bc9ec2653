use sqlx::{PgConnection, PgPool};
use tonic::{Request, Response, Status};

use crate::db::{
    find_field_by_name, load_tags, load_tags_for_items, load_values, record_log, set_item_tags,
    write_value, LogEntry, ValueOwner,
};
use crate::error::{AppError, AppResult};
use crate::middleware::{authenticated_user, AuthenticatedUser};
use crate::models::{
    duplicate_name_error, normalize_tags, visible_values, ItemFields, ItemInput, ItemModel,
    LogCategory, TagModel, ITEM_COLUMNS, NAME_MAX,
};
use crate::proto::common::{CustomValueInput, Empty, Tag};
use crate::proto::items::items_service_server::ItemsService;
use crate::proto::items::{
    CreateItemReq, CreateTagReq, DeleteItemReq, DeleteTagReq, GetItemReq, Item, ItemRes,
    ListItemsReq, ListItemsRes, ListTagsRes, UpdateItemReq,
};
use crate::validation::{required_text, FieldErrors};

pub struct ItemsServiceImpl {
    pool: PgPool,
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Loads tags and the caller-visible custom fields of an item.
async fn item_to_proto(conn: &mut PgConnection, model: &ItemModel, is_staff: bool) -> AppResult<Item> {
    let tags = load_tags(&mut *conn, model.id).await?;
    let values = load_values(&mut *conn, ValueOwner::Item(model.id)).await?;
    Ok(model.to_proto(tags, visible_values(&values, is_staff)))
}

/// Writes every custom value input, reporting all bad ones together.
async fn apply_custom_values(
    conn: &mut PgConnection,
    owner: ValueOwner,
    inputs: &[CustomValueInput],
) -> AppResult<()> {
    let mut errors = FieldErrors::new();
    for input in inputs {
        let Some(field) = find_field_by_name(&mut *conn, &input.field_name).await? else {
            errors.add(input.field_name.as_str(), "Unknown custom field.");
            continue;
        };
        match write_value(&mut *conn, owner, &field, &input.value).await {
            Ok(_) => {}
            Err(AppError::Validation(e)) => errors.merge(e),
            Err(e) => return Err(e),
        }
    }
    errors.finish(()).map_err(AppError::from)
}

/// Human-readable summary of what an update changed.
fn describe_changes(before: &ItemModel, after: &ItemFields) -> String {
    let mut changes = Vec::new();
    if before.name != after.name {
        changes.push(format!("name '{}' -> '{}'", before.name, after.name));
    }
    if before.quantity != after.quantity {
        changes.push(format!("quantity {} -> {}", before.quantity, after.quantity));
    }
    if before.minimum_stock != after.minimum_stock {
        changes.push(format!(
            "minimum stock {} -> {}",
            before.minimum_stock, after.minimum_stock
        ));
    }
    if before.model_no != after.model_no {
        changes.push("model number".to_string());
    }
    if before.description != after.description {
        changes.push("description".to_string());
    }
    if before.location != after.location {
        changes.push("location".to_string());
    }
    if changes.is_empty() {
        "no attribute changes".to_string()
    } else {
        changes.join(", ")
    }
}

impl ItemsServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn create(&self, user: &AuthenticatedUser, req: CreateItemReq) -> AppResult<Item> {
        let fields = ItemInput {
            name: &req.name,
            quantity: &req.quantity,
            minimum_stock: &req.minimum_stock,
            model_no: &req.model_no,
            description: &req.description,
            location: &req.location,
            tags: &req.tags,
        }
        .validate()?;

        if req.has_assets && fields.quantity > 0 {
            return Err(AppError::field(
                "quantity",
                "Asset-tracked items start empty; add assets to stock them.",
            ));
        }

        let mut tx = self.pool.begin().await?;

        // Atomic insert-if-absent on the unique name
        let created: Option<ItemModel> = sqlx::query_as(&format!(
            "INSERT INTO items (name, quantity, minimum_stock, model_no, description, location, has_assets) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (name) DO NOTHING RETURNING {}",
            ITEM_COLUMNS
        ))
        .bind(&fields.name)
        .bind(fields.quantity)
        .bind(fields.minimum_stock)
        .bind(&fields.model_no)
        .bind(&fields.description)
        .bind(&fields.location)
        .bind(req.has_assets)
        .fetch_optional(&mut *tx)
        .await?;

        let model = created.ok_or_else(|| AppError::Validation(duplicate_name_error()))?;

        set_item_tags(&mut *tx, model.id, &fields.tags).await?;
        apply_custom_values(&mut *tx, ValueOwner::Item(model.id), &req.custom_values).await?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::ItemCreation,
                user.user_id,
                format!("Item {} created with quantity {}", model.name, model.quantity),
            )
            .item(model.id, &model.name),
        )
        .await?;

        let item = item_to_proto(&mut *tx, &model, user.is_staff).await?;
        tx.commit().await?;

        tracing::info!("Item {} (id={}) created by {}", model.name, model.id, user.username);
        Ok(item)
    }

    async fn update(&self, user: &AuthenticatedUser, req: UpdateItemReq) -> AppResult<Item> {
        let fields = ItemInput {
            name: &req.name,
            quantity: &req.quantity,
            minimum_stock: &req.minimum_stock,
            model_no: &req.model_no,
            description: &req.description,
            location: &req.location,
            tags: &req.tags,
        }
        .validate()?;

        let mut tx = self.pool.begin().await?;

        let current: ItemModel = sqlx::query_as(&format!(
            "SELECT {} FROM items WHERE id = $1 FOR UPDATE",
            ITEM_COLUMNS
        ))
        .bind(req.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found("Item"))?;

        if current.has_assets && fields.quantity != current.quantity {
            return Err(AppError::field(
                "quantity",
                "Quantity of an asset-tracked item follows its assets.",
            ));
        }

        let updated: ItemModel = sqlx::query_as(&format!(
            "UPDATE items SET name = $1, quantity = $2, minimum_stock = $3, model_no = $4, \
             description = $5, location = $6, updated_at = NOW() \
             WHERE id = $7 RETURNING {}",
            ITEM_COLUMNS
        ))
        .bind(&fields.name)
        .bind(fields.quantity)
        .bind(fields.minimum_stock)
        .bind(&fields.model_no)
        .bind(&fields.description)
        .bind(&fields.location)
        .bind(req.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Validation(duplicate_name_error())
            } else {
                AppError::Database(e)
            }
        })?;

        set_item_tags(&mut *tx, updated.id, &fields.tags).await?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::ItemModification,
                user.user_id,
                format!("Item {} modified: {}", updated.name, describe_changes(&current, &fields)),
            )
            .item(updated.id, &updated.name),
        )
        .await?;

        let item = item_to_proto(&mut *tx, &updated, user.is_staff).await?;
        tx.commit().await?;
        Ok(item)
    }

    async fn delete(&self, user: &AuthenticatedUser, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let name: Option<String> =
            sqlx::query_scalar("SELECT name FROM items WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let name = name.ok_or_else(|| AppError::not_found("Item"))?;

        // Logged first; the reference is nulled by the delete, the name stays
        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::ItemDeletion,
                user.user_id,
                format!("Item {} deleted", name),
            )
            .item(id, &name),
        )
        .await?;

        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!("Item {} (id={}) deleted by {}", name, id, user.username);
        Ok(())
    }

    async fn list(&self, user: &AuthenticatedUser, req: ListItemsReq) -> AppResult<Vec<Item>> {
        let include_tags = normalize_tags(&req.include_tags)?;
        let exclude_tags = normalize_tags(&req.exclude_tags)?;
        let search = req.search.trim();

        // Build dynamic WHERE clause
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        let search_filter = if search.is_empty() {
            None
        } else {
            conditions.push(format!(
                "(name ILIKE ${0} OR model_no ILIKE ${0} OR description ILIKE ${0})",
                param_idx
            ));
            param_idx += 1;
            Some(format!("%{}%", search))
        };

        // Items must carry every included tag
        let include_filter = if include_tags.is_empty() {
            None
        } else {
            conditions.push(format!(
                "(SELECT COUNT(DISTINCT t.name) FROM item_tags it JOIN tags t ON t.id = it.tag_id \
                 WHERE it.item_id = items.id AND t.name = ANY(${})) = {}",
                param_idx,
                include_tags.len()
            ));
            param_idx += 1;
            Some(include_tags)
        };

        let exclude_filter = if exclude_tags.is_empty() {
            None
        } else {
            conditions.push(format!(
                "NOT EXISTS (SELECT 1 FROM item_tags it JOIN tags t ON t.id = it.tag_id \
                 WHERE it.item_id = items.id AND t.name = ANY(${}))",
                param_idx
            ));
            Some(exclude_tags)
        };

        if req.low_stock_only {
            conditions.push("quantity < minimum_stock".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {} FROM items {} ORDER BY name ASC",
            ITEM_COLUMNS, where_clause
        );

        let mut query = sqlx::query_as::<_, ItemModel>(&sql);
        if let Some(ref v) = search_filter {
            query = query.bind(v);
        }
        if let Some(ref v) = include_filter {
            query = query.bind(v);
        }
        if let Some(ref v) = exclude_filter {
            query = query.bind(v);
        }

        let mut conn = self.pool.acquire().await?;
        let models: Vec<ItemModel> = query.fetch_all(&mut *conn).await?;

        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let mut tags = load_tags_for_items(&mut *conn, &ids).await?;

        let mut items = Vec::with_capacity(models.len());
        for model in &models {
            let values = load_values(&mut *conn, ValueOwner::Item(model.id)).await?;
            items.push(model.to_proto(
                tags.remove(&model.id).unwrap_or_default(),
                visible_values(&values, user.is_staff),
            ));
        }
        Ok(items)
    }

    async fn insert_tag(&self, user: &AuthenticatedUser, name: &str) -> AppResult<TagModel> {
        let name = required_text("name", name, NAME_MAX)?;
        let mut tx = self.pool.begin().await?;

        let tag: Option<TagModel> = sqlx::query_as(
            "INSERT INTO tags (name) VALUES ($1) ON CONFLICT (name) DO NOTHING RETURNING id, name",
        )
        .bind(&name)
        .fetch_optional(&mut *tx)
        .await?;
        let tag =
            tag.ok_or_else(|| AppError::field("name", "A tag with this name already exists."))?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::ItemModification,
                user.user_id,
                format!("Tag {} created", tag.name),
            ),
        )
        .await?;

        tx.commit().await?;
        Ok(tag)
    }

    /// Removing a tag detaches it from every item carrying it.
    async fn remove_tag(&self, user: &AuthenticatedUser, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let name: String = sqlx::query_scalar("DELETE FROM tags WHERE id = $1 RETURNING name")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found("Tag"))?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::ItemModification,
                user.user_id,
                format!("Tag {} deleted", name),
            ),
        )
        .await?;

        tx.commit().await?;
        Ok(())
    }
}

#[tonic::async_trait]
impl ItemsService for ItemsServiceImpl {
    async fn create_item(
        &self,
        request: Request<CreateItemReq>,
    ) -> Result<Response<ItemRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let item = self.create(&auth_user, request.into_inner()).await?;
        Ok(Response::new(ItemRes { item: Some(item) }))
    }

    async fn get_item(&self, request: Request<GetItemReq>) -> Result<Response<ItemRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        let req = request.into_inner();

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| Status::internal(format!("Database connection error: {}", e)))?;

        let model: Option<ItemModel> =
            sqlx::query_as(&format!("SELECT {} FROM items WHERE id = $1", ITEM_COLUMNS))
                .bind(req.id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        match model {
            Some(m) => {
                let item = item_to_proto(&mut *conn, &m, auth_user.is_staff).await?;
                Ok(Response::new(ItemRes { item: Some(item) }))
            }
            None => Err(Status::not_found("Item not found")),
        }
    }

    async fn update_item(
        &self,
        request: Request<UpdateItemReq>,
    ) -> Result<Response<ItemRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let item = self.update(&auth_user, request.into_inner()).await?;
        Ok(Response::new(ItemRes { item: Some(item) }))
    }

    async fn delete_item(
        &self,
        request: Request<DeleteItemReq>,
    ) -> Result<Response<Empty>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        self.delete(&auth_user, request.into_inner().id).await?;
        Ok(Response::new(Empty {}))
    }

    async fn list_items(
        &self,
        request: Request<ListItemsReq>,
    ) -> Result<Response<ListItemsRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        let items = self.list(&auth_user, request.into_inner()).await?;
        Ok(Response::new(ListItemsRes { items }))
    }

    async fn list_tags(&self, request: Request<Empty>) -> Result<Response<ListTagsRes>, Status> {
        authenticated_user(&request)?;

        let tags: Vec<TagModel> = sqlx::query_as("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        Ok(Response::new(ListTagsRes {
            tags: tags.iter().map(TagModel::to_proto).collect(),
        }))
    }

    async fn create_tag(&self, request: Request<CreateTagReq>) -> Result<Response<Tag>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let tag = self.insert_tag(&auth_user, &request.into_inner().name).await?;
        Ok(Response::new(tag.to_proto()))
    }

    async fn delete_tag(&self, request: Request<DeleteTagReq>) -> Result<Response<Empty>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        self.remove_tag(&auth_user, request.into_inner().id).await?;
        Ok(Response::new(Empty {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model() -> ItemModel {
        let now = Utc::now();
        ItemModel {
            id: 1,
            name: "Resistor".to_string(),
            quantity: 10,
            minimum_stock: 2,
            model_no: "R-1".to_string(),
            description: String::new(),
            location: "Bin 4".to_string(),
            has_assets: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn fields() -> ItemFields {
        ItemFields {
            name: "Resistor".to_string(),
            quantity: 10,
            minimum_stock: 2,
            model_no: "R-1".to_string(),
            description: String::new(),
            location: "Bin 4".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_describe_changes() {
        assert_eq!(describe_changes(&model(), &fields()), "no attribute changes");

        let mut after = fields();
        after.name = "Resistor 10k".to_string();
        after.quantity = 7;
        after.location = "Bin 5".to_string();
        assert_eq!(
            describe_changes(&model(), &after),
            "name 'Resistor' -> 'Resistor 10k', quantity 10 -> 7, location"
        );
    }
}
