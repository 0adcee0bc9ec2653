pub mod auth;

pub use auth::{authenticated_user, AuthLayer, AuthMiddleware, AuthenticatedUser};
