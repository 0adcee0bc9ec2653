pub mod config;
pub mod credentials;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod proto;
pub mod services;
pub mod validation;

pub use config::Config;
pub use error::{AppError, AppResult};
