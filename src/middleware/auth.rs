use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use http::header::HeaderValue;
use http::Request as HttpRequest;
use http::Response as HttpResponse;
use http_body_util::combinators::UnsyncBoxBody;
use sqlx::PgPool;
use tonic::Status;
use tower::{Layer, Service};

use crate::credentials::{decode_jwt, hash_api_token};
use crate::error::AppError;

/// Authenticated user info injected by the auth middleware into request extensions.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub is_staff: bool,
}

impl AuthenticatedUser {
    pub fn require_staff(&self) -> Result<(), AppError> {
        if self.is_staff {
            Ok(())
        } else {
            Err(AppError::staff_only())
        }
    }
}

/// Pulls the user injected by [`AuthMiddleware`] out of a tonic request.
pub fn authenticated_user<T>(request: &tonic::Request<T>) -> Result<AuthenticatedUser, Status> {
    request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| Status::unauthenticated("Authentication required"))
}

/// Public paths that do not require authentication
const PUBLIC_PATHS: &[&str] = &[
    "/kipventory.auth.AuthService/Login",
    "/grpc.health.v1.Health/Check",
    "/grpc.health.v1.Health/Watch",
    "/grpc.reflection.v1.ServerReflection/ServerReflectionInfo",
    "/grpc.reflection.v1alpha.ServerReflection/ServerReflectionInfo",
];

fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|p| path == *p)
}

/// Credentials carried by the `authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Credentials {
    Jwt(String),
    ApiToken(String),
}

impl Credentials {
    fn parse(header: &str) -> Option<Self> {
        let header = header.trim();
        if let Some(token) = header.strip_prefix("Bearer ") {
            let token = token.trim();
            return (!token.is_empty()).then(|| Credentials::Jwt(token.to_string()));
        }
        if let Some(token) = header.strip_prefix("Token ") {
            let token = token.trim();
            return (!token.is_empty()).then(|| Credentials::ApiToken(token.to_string()));
        }
        None
    }
}

#[derive(Clone)]
pub struct AuthLayer {
    pool: PgPool,
    jwt_secret: String,
}

impl AuthLayer {
    pub fn new(pool: PgPool, jwt_secret: String) -> Self {
        Self { pool, jwt_secret }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            pool: self.pool.clone(),
            jwt_secret: self.jwt_secret.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    pool: PgPool,
    jwt_secret: String,
}

type BoxBody = UnsyncBoxBody<bytes::Bytes, Status>;

fn grpc_status_response(status: Status) -> HttpResponse<BoxBody> {
    let code = status.code() as i32;
    let message = status.message().to_string();

    let mut response = HttpResponse::new(UnsyncBoxBody::default());
    response.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("application/grpc"),
    );
    response
        .headers_mut()
        .insert("grpc-status", HeaderValue::from(code));
    if !message.is_empty() {
        if let Ok(val) = HeaderValue::from_str(&message) {
            response.headers_mut().insert("grpc-message", val);
        }
    }
    response
}

impl<S, ReqBody> Service<HttpRequest<ReqBody>> for AuthMiddleware<S>
where
    S: Service<HttpRequest<ReqBody>, Response = HttpResponse<BoxBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ReqBody: Send + 'static,
{
    type Response = HttpResponse<BoxBody>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: HttpRequest<ReqBody>) -> Self::Future {
        let mut inner = self.inner.clone();
        std::mem::swap(&mut self.inner, &mut inner);

        let pool = self.pool.clone();
        let jwt_secret = self.jwt_secret.clone();

        Box::pin(async move {
            let path = req.uri().path().to_string();

            if is_public_path(&path) {
                return inner.call(req).await;
            }

            let credentials = req
                .headers()
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .and_then(Credentials::parse);

            // No credentials: pass through, services reject with unauthenticated
            let Some(credentials) = credentials else {
                return inner.call(req).await;
            };

            match resolve_user(&pool, &jwt_secret, &credentials).await {
                Ok(Some(user)) => {
                    tracing::debug!("{} called by {} (staff={})", path, user.username, user.is_staff);
                    req.extensions_mut().insert(user);
                    inner.call(req).await
                }
                Ok(None) => {
                    tracing::warn!("Rejected invalid credentials for {}", path);
                    Ok(grpc_status_response(Status::unauthenticated(
                        "Invalid or expired credentials",
                    )))
                }
                Err(e) => {
                    tracing::error!("Credential lookup failed: {}", e);
                    Ok(grpc_status_response(Status::internal(
                        "Failed to verify credentials",
                    )))
                }
            }
        })
    }
}

/// Maps credentials to an active user; `None` when they do not check out.
async fn resolve_user(
    pool: &PgPool,
    jwt_secret: &str,
    credentials: &Credentials,
) -> Result<Option<AuthenticatedUser>, sqlx::Error> {
    match credentials {
        Credentials::Jwt(token) => {
            let Some(claims) = decode_jwt(token, jwt_secret) else {
                return Ok(None);
            };
            sqlx::query_as(
                "SELECT id AS user_id, username, is_staff FROM users WHERE id = $1 AND is_active",
            )
            .bind(claims.sub)
            .fetch_optional(pool)
            .await
        }
        Credentials::ApiToken(token) => {
            sqlx::query_as(
                "SELECT u.id AS user_id, u.username, u.is_staff FROM api_tokens t \
                 JOIN users u ON u.id = t.user_id \
                 WHERE t.token_hash = $1 AND u.is_active",
            )
            .bind(hash_api_token(token))
            .fetch_optional(pool)
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_parse() {
        assert_eq!(
            Credentials::parse("Bearer abc.def.ghi"),
            Some(Credentials::Jwt("abc.def.ghi".to_string()))
        );
        assert_eq!(
            Credentials::parse("Token 0123abcd"),
            Some(Credentials::ApiToken("0123abcd".to_string()))
        );
        assert_eq!(Credentials::parse("Bearer "), None);
        assert_eq!(Credentials::parse("Basic dXNlcjpwdw=="), None);
        assert_eq!(Credentials::parse(""), None);
    }

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/kipventory.auth.AuthService/Login"));
        assert!(is_public_path("/grpc.health.v1.Health/Check"));
        assert!(!is_public_path("/kipventory.items.ItemsService/CreateItem"));
    }

    #[test]
    fn test_authenticated_user_from_extensions() {
        let mut request = tonic::Request::new(());
        assert_eq!(
            authenticated_user(&request).unwrap_err().code(),
            tonic::Code::Unauthenticated
        );

        request.extensions_mut().insert(AuthenticatedUser {
            user_id: 3,
            username: "bob".to_string(),
            is_staff: false,
        });
        let user = authenticated_user(&request).unwrap();
        assert_eq!(user.user_id, 3);
        assert!(user.require_staff().is_err());
    }

    #[test]
    fn test_status_response_headers() {
        let response = grpc_status_response(Status::unauthenticated("nope"));
        assert_eq!(response.headers()["grpc-status"], "16");
        assert_eq!(response.headers()["grpc-message"], "nope");
        assert_eq!(response.headers()["content-type"], "application/grpc");
    }
}
