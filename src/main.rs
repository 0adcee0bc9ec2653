use std::net::SocketAddr;

use kipventory::config::Config;
use kipventory::db::{create_pool, ensure_admin, run_migrations};
use kipventory::middleware::AuthLayer;
use kipventory::proto::assets::assets_service_server::AssetsServiceServer;
use kipventory::proto::auth::auth_service_server::AuthServiceServer;
use kipventory::proto::cart::cart_service_server::CartServiceServer;
use kipventory::proto::fields::custom_fields_service_server::CustomFieldsServiceServer;
use kipventory::proto::health::health_server::HealthServer;
use kipventory::proto::items::items_service_server::ItemsServiceServer;
use kipventory::proto::loans::loans_service_server::LoansServiceServer;
use kipventory::proto::logs::logs_service_server::LogsServiceServer;
use kipventory::proto::requests::requests_service_server::RequestsServiceServer;
use kipventory::services::{
    AssetsServiceImpl, AuthServiceImpl, CartServiceImpl, CustomFieldsServiceImpl,
    HealthServiceImpl, ItemsServiceImpl, LoansServiceImpl, LogsServiceImpl, RequestsServiceImpl,
};

use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Include file descriptor for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] =
    tonic::include_file_descriptor_set!("kipventory_descriptor");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kipventory=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting kipventory gRPC server...");
    tracing::info!("Connecting to database...");

    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection established");

    if config.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Migrations applied");
    }

    if let Some((username, password)) = config.admin_credentials() {
        ensure_admin(&pool, username, password).await?;
    }

    // Create services
    let auth_service = AuthServiceImpl::new(pool.clone(), &config);
    let items_service = ItemsServiceImpl::new(pool.clone());
    let custom_fields_service = CustomFieldsServiceImpl::new(pool.clone());
    let assets_service = AssetsServiceImpl::new(pool.clone());
    let cart_service = CartServiceImpl::new(pool.clone());
    let requests_service = RequestsServiceImpl::new(pool.clone());
    let loans_service = LoansServiceImpl::new(pool.clone());
    let logs_service = LogsServiceImpl::new(pool.clone());
    let health_service = HealthServiceImpl::new(pool.clone());

    // CORS layer for gRPC-Web
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
        .expose_headers(Any);

    let auth_layer = AuthLayer::new(pool.clone(), config.jwt_secret.clone());

    // Build reflection service
    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    // Build and run server with gRPC-Web support
    Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(TraceLayer::new_for_grpc())
        .layer(cors)
        .layer(tonic_web::GrpcWebLayer::new())
        .layer(auth_layer)
        .add_service(reflection_service)
        .add_service(HealthServer::new(health_service))
        .add_service(AuthServiceServer::new(auth_service))
        .add_service(ItemsServiceServer::new(items_service))
        .add_service(CustomFieldsServiceServer::new(custom_fields_service))
        .add_service(AssetsServiceServer::new(assets_service))
        .add_service(CartServiceServer::new(cart_service))
        .add_service(RequestsServiceServer::new(requests_service))
        .add_service(LoansServiceServer::new(loans_service))
        .add_service(LogsServiceServer::new(logs_service))
        .serve(addr)
        .await?;

    Ok(())
}
