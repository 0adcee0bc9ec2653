pub mod assets_service;
pub mod auth_service;
pub mod cart_service;
pub mod custom_fields_service;
pub mod health_service;
pub mod items_service;
pub mod loans_service;
pub mod logs_service;
pub mod requests_service;

pub use assets_service::AssetsServiceImpl;
pub use auth_service::AuthServiceImpl;
pub use cart_service::CartServiceImpl;
pub use custom_fields_service::CustomFieldsServiceImpl;
pub use health_service::HealthServiceImpl;
pub use items_service::ItemsServiceImpl;
pub use loans_service::LoansServiceImpl;
pub use logs_service::LogsServiceImpl;
pub use requests_service::RequestsServiceImpl;
