use std::sync::Arc;

use auth::TokenService;
use catalog_service::config::Config;
use catalog_service::domain::auth::ports::AuthServicePort;
use catalog_service::domain::auth::service::AuthService;
use catalog_service::domain::product::ports::ProductServicePort;
use catalog_service::domain::product::service::ProductService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::events::LogEventPublisher;
use catalog_service::outbound::registry::InMemoryRefreshTokenRegistry;
use catalog_service::outbound::repositories::PostgresCredentialStore;
use catalog_service::outbound::repositories::PostgresProductRepository;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Fails fast when either token signing secret is absent
    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        access_token_ttl_minutes = config.auth.access_token_ttl_minutes,
        refresh_token_ttl_hours = ?config.auth.refresh_token_ttl_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let tokens = Arc::new(TokenService::new(
        config.auth.access_token_secret.as_bytes(),
        config.auth.refresh_token_secret.as_bytes(),
        config.auth.access_token_ttl_minutes,
    ));

    let credential_store = Arc::new(PostgresCredentialStore::new(pg_pool.clone()));
    let refresh_registry = Arc::new(InMemoryRefreshTokenRegistry::new());
    let auth_service: Arc<dyn AuthServicePort> = Arc::new(AuthService::new(
        credential_store,
        Arc::clone(&refresh_registry),
        Arc::clone(&tokens),
    ));

    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool));
    let event_publisher = Arc::new(LogEventPublisher::new());
    let product_service: Arc<dyn ProductServicePort> =
        Arc::new(ProductService::new(product_repository, event_publisher));

    if let Some(ttl_hours) = config.auth.refresh_token_ttl_hours {
        let sweep_registry = Arc::clone(&refresh_registry);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(3600));
            loop {
                interval.tick().await;
                let cutoff = Utc::now() - chrono::Duration::hours(ttl_hours);
                sweep_registry.purge_older_than(cutoff).await;
            }
        });
        tracing::info!(ttl_hours, "Refresh token eviction enabled");
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, product_service, tokens);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
