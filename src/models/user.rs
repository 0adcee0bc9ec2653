use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::proto::common::User;

/// Columns selected for [`UserModel`].
pub const USER_COLUMNS: &str = "id, username, first_name, last_name, email, is_staff";

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_staff: bool,
}

impl UserModel {
    pub fn to_proto(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            is_staff: self.is_staff,
        }
    }
}

/// Credentials row used by login only.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordCredential {
    pub id: i64,
    pub password_hash: String,
    pub is_active: bool,
}
