use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::db::{find_field_by_name, record_log, write_value, LogEntry, ValueOwner};
use crate::error::{AppError, AppResult};
use crate::middleware::{authenticated_user, AuthenticatedUser};
use crate::models::{CustomFieldModel, FieldType, LogCategory, NAME_MAX};
use crate::proto::common::{CustomFieldValue, Empty};
use crate::proto::fields::custom_fields_service_server::CustomFieldsService;
use crate::proto::fields::{
    CreateFieldReq, CustomField, DeleteFieldReq, ListFieldsReq, ListFieldsRes,
    SetAssetFieldValueReq, SetItemFieldValueReq,
};
use crate::validation::{required_text, FieldErrors};

pub struct CustomFieldsServiceImpl {
    pool: PgPool,
}

impl CustomFieldsServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn create(
        &self,
        user: &AuthenticatedUser,
        req: CreateFieldReq,
    ) -> AppResult<CustomFieldModel> {
        let mut errors = FieldErrors::new();
        let name = errors.collect(required_text("name", &req.name, NAME_MAX));
        let field_type = FieldType::from_proto(req.field_type);
        if field_type.is_none() {
            errors.add(
                "field_type",
                format!("\"{}\" is not a valid choice.", req.field_type),
            );
        }
        let (Some(name), Some(field_type)) = (name, field_type) else {
            return Err(errors.into());
        };

        let mut tx = self.pool.begin().await?;
        let created: Option<CustomFieldModel> = sqlx::query_as(
            "INSERT INTO custom_fields (name, field_type, private, asset_tracked) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (name) DO NOTHING \
             RETURNING id, name, field_type, private, asset_tracked",
        )
        .bind(&name)
        .bind(field_type.code())
        .bind(req.private)
        .bind(req.asset_tracked)
        .fetch_optional(&mut *tx)
        .await?;

        let field = created
            .ok_or_else(|| AppError::field("name", "A field with this name already exists."))?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::FieldModification,
                user.user_id,
                format!("Custom field {} ({}) created", field.name, field_type.label()),
            ),
        )
        .await?;

        tx.commit().await?;
        Ok(field)
    }

    /// Deleting a field drops its values on every item and asset.
    async fn delete(&self, user: &AuthenticatedUser, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let name: String =
            sqlx::query_scalar("DELETE FROM custom_fields WHERE id = $1 RETURNING name")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::not_found("Custom field"))?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::FieldModification,
                user.user_id,
                format!("Custom field {} deleted", name),
            ),
        )
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Sets one item's value for a field, logged as an item modification.
    async fn set_item_value(
        &self,
        user: &AuthenticatedUser,
        req: SetItemFieldValueReq,
    ) -> AppResult<CustomFieldValue> {
        let mut tx = self.pool.begin().await?;

        let item_name: String =
            sqlx::query_scalar("SELECT name FROM items WHERE id = $1 FOR UPDATE")
                .bind(req.item_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::not_found("Item"))?;

        let field = find_field_by_name(&mut *tx, &req.field_name)
            .await?
            .ok_or_else(|| AppError::not_found("Custom field"))?;

        let row = write_value(&mut *tx, ValueOwner::Item(req.item_id), &field, &req.value).await?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::ItemModification,
                user.user_id,
                format!("Item {} field '{}' set", item_name, field.name),
            )
            .item(req.item_id, &item_name),
        )
        .await?;

        tx.commit().await?;
        Ok(row.to_proto(true))
    }

    async fn set_asset_value(
        &self,
        user: &AuthenticatedUser,
        req: SetAssetFieldValueReq,
    ) -> AppResult<CustomFieldValue> {
        let mut tx = self.pool.begin().await?;

        let asset: Option<(i64, String, String)> = sqlx::query_as(
            "SELECT i.id, i.name, a.tag FROM assets a JOIN items i ON i.id = a.item_id \
             WHERE a.id = $1 FOR UPDATE OF a",
        )
        .bind(req.asset_id)
        .fetch_optional(&mut *tx)
        .await?;
        let (item_id, item_name, tag) = asset.ok_or_else(|| AppError::not_found("Asset"))?;

        let field = find_field_by_name(&mut *tx, &req.field_name)
            .await?
            .ok_or_else(|| AppError::not_found("Custom field"))?;

        let row = write_value(&mut *tx, ValueOwner::Asset(req.asset_id), &field, &req.value).await?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::ItemModification,
                user.user_id,
                format!("Asset {} of {} field '{}' set", tag, item_name, field.name),
            )
            .item(item_id, &item_name),
        )
        .await?;

        tx.commit().await?;
        Ok(row.to_proto(true))
    }
}

#[tonic::async_trait]
impl CustomFieldsService for CustomFieldsServiceImpl {
    async fn create_field(
        &self,
        request: Request<CreateFieldReq>,
    ) -> Result<Response<CustomField>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let field = self.create(&auth_user, request.into_inner()).await?;
        Ok(Response::new(field.to_proto(true)))
    }

    async fn list_fields(
        &self,
        request: Request<ListFieldsReq>,
    ) -> Result<Response<ListFieldsRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        let req = request.into_inner();

        // Private fields are hidden from non-staff
        let fields: Vec<CustomFieldModel> = sqlx::query_as(
            "SELECT id, name, field_type, private, asset_tracked FROM custom_fields \
             WHERE ($1 OR NOT private) AND ($2::boolean IS NULL OR asset_tracked = $2) \
             ORDER BY name",
        )
        .bind(auth_user.is_staff)
        .bind(req.asset_tracked)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        Ok(Response::new(ListFieldsRes {
            fields: fields
                .iter()
                .map(|f| f.to_proto(auth_user.is_staff))
                .collect(),
        }))
    }

    async fn delete_field(
        &self,
        request: Request<DeleteFieldReq>,
    ) -> Result<Response<Empty>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        self.delete(&auth_user, request.into_inner().id).await?;
        Ok(Response::new(Empty {}))
    }

    async fn set_item_field_value(
        &self,
        request: Request<SetItemFieldValueReq>,
    ) -> Result<Response<CustomFieldValue>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let value = self.set_item_value(&auth_user, request.into_inner()).await?;
        Ok(Response::new(value))
    }

    async fn set_asset_field_value(
        &self,
        request: Request<SetAssetFieldValueReq>,
    ) -> Result<Response<CustomFieldValue>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let value = self.set_asset_value(&auth_user, request.into_inner()).await?;
        Ok(Response::new(value))
    }
}
