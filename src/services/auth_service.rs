use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::config::Config;
use crate::credentials::{generate_api_token, hash_api_token, hash_password, issue_jwt, verify_password};
use crate::db::{find_user, record_log, LogEntry};
use crate::error::{AppError, AppResult};
use crate::middleware::authenticated_user;
use crate::models::{LogCategory, PasswordCredential, UserModel, USER_COLUMNS};
use crate::proto::auth::auth_service_server::AuthService;
use crate::proto::auth::{ApiTokenRes, CreateUserReq, ListUsersRes, LoginReq, LoginRes};
use crate::proto::common::{Empty, User};
use crate::validation::{optional_text, required_text, FieldErrors};

pub struct AuthServiceImpl {
    pool: PgPool,
    jwt_secret: String,
    jwt_expiry_hours: i64,
}

impl AuthServiceImpl {
    pub fn new(pool: PgPool, config: &Config) -> Self {
        Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            jwt_expiry_hours: config.jwt_expiry_hours,
        }
    }

    async fn load_user(&self, user_id: i64) -> AppResult<UserModel> {
        let mut conn = self.pool.acquire().await?;
        find_user(&mut *conn, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))
    }

    async fn insert_user(&self, actor_id: i64, req: CreateUserReq) -> AppResult<UserModel> {
        let mut errors = FieldErrors::new();
        let username = errors.collect(required_text("username", &req.username, 150));
        if req.password.chars().count() < 8 {
            errors.add("password", "Ensure this field has at least 8 characters.");
        }
        let first_name = errors.collect(optional_text("first_name", &req.first_name, 30));
        let last_name = errors.collect(optional_text("last_name", &req.last_name, 30));
        let email = errors.collect(optional_text("email", &req.email, 254));
        if !req.email.trim().is_empty() && !req.email.contains('@') {
            errors.add("email", "Enter a valid email address.");
        }
        let (Some(username), Some(first_name), Some(last_name), Some(email)) =
            (username, first_name, last_name, email)
        else {
            return Err(errors.into());
        };
        errors.finish(())?;

        let password_hash = hash_password(&req.password)?;
        let mut tx = self.pool.begin().await?;

        let created: Option<UserModel> = sqlx::query_as(&format!(
            "INSERT INTO users (username, password_hash, first_name, last_name, email, is_staff) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (username) DO NOTHING RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&username)
        .bind(&password_hash)
        .bind(&first_name)
        .bind(&last_name)
        .bind(&email)
        .bind(req.is_staff)
        .fetch_optional(&mut *tx)
        .await?;

        let user = created.ok_or_else(|| {
            AppError::field("username", "A user with that username already exists.")
        })?;

        record_log(
            &mut *tx,
            LogEntry::new(
                LogCategory::UserCreation,
                actor_id,
                format!("User {} created (staff={})", user.username, user.is_staff),
            )
            .affected(user.id),
        )
        .await?;

        tx.commit().await?;
        Ok(user)
    }
}

#[tonic::async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, request: Request<LoginReq>) -> Result<Response<LoginRes>, Status> {
        let req = request.into_inner();

        if req.username.is_empty() || req.password.is_empty() {
            return Err(Status::invalid_argument("username and password are required"));
        }

        let row: Option<PasswordCredential> = sqlx::query_as(
            "SELECT id, password_hash, is_active FROM users WHERE username = $1",
        )
        .bind(&req.username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        let credential = row
            .filter(|c| c.is_active)
            .ok_or_else(|| Status::unauthenticated("Invalid credentials"))?;

        if !verify_password(&req.password, &credential.password_hash) {
            tracing::warn!("Failed login for {}", req.username);
            return Err(Status::unauthenticated("Invalid credentials"));
        }

        let user = self.load_user(credential.id).await?;
        let (token, exp) = issue_jwt(user.id, &user.username, &self.jwt_secret, self.jwt_expiry_hours)?;

        tracing::info!("User {} logged in", user.username);
        Ok(Response::new(LoginRes {
            token,
            expires_at: exp.to_rfc3339(),
            user: Some(user.to_proto()),
        }))
    }

    async fn generate_api_token(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<ApiTokenRes>, Status> {
        let auth_user = authenticated_user(&request)?;

        let token = generate_api_token();
        sqlx::query(
            "INSERT INTO api_tokens (user_id, token_hash) VALUES ($1, $2) \
             ON CONFLICT (user_id) DO UPDATE SET token_hash = EXCLUDED.token_hash, created_at = NOW()",
        )
        .bind(auth_user.user_id)
        .bind(hash_api_token(&token))
        .execute(&self.pool)
        .await
        .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        tracing::info!("API token rotated for {}", auth_user.username);
        Ok(Response::new(ApiTokenRes { token }))
    }

    async fn get_current_user(&self, request: Request<Empty>) -> Result<Response<User>, Status> {
        let auth_user = authenticated_user(&request)?;
        let user = self.load_user(auth_user.user_id).await?;
        Ok(Response::new(user.to_proto()))
    }

    async fn create_user(&self, request: Request<CreateUserReq>) -> Result<Response<User>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;
        let user = self.insert_user(auth_user.user_id, request.into_inner()).await?;
        Ok(Response::new(user.to_proto()))
    }

    async fn list_users(&self, request: Request<Empty>) -> Result<Response<ListUsersRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        auth_user.require_staff()?;

        let users: Vec<UserModel> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE is_active ORDER BY username",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        Ok(Response::new(ListUsersRes {
            users: users.iter().map(UserModel::to_proto).collect(),
        }))
    }
}
