//! CampLog server entry point.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use camplog::adapters::auth::{OidcConfig, OidcTokenVerifier};
use camplog::adapters::http::{api_router, with_service_layers, ApiDependencies};
use camplog::adapters::memory::{
    InMemoryLocationRepository, InMemoryStore, InMemoryTripRepository, InMemoryUserRepository,
};
use camplog::adapters::postgres::{
    run_migrations, PostgresLocationRepository, PostgresTripRepository, PostgresUserRepository,
};
use camplog::config::{AppConfig, DatabaseConfig, ServerConfig, StorageBackend};
use camplog::ports::{LocationRepository, TripRepository, UserRepository};

type Repositories = (
    Arc<dyn UserRepository>,
    Arc<dyn TripRepository>,
    Arc<dyn LocationRepository>,
);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);
    tracing::info!(
        environment = ?config.server.environment,
        storage = ?config.storage,
        "Starting CampLog"
    );

    let (users, trips, locations) = match config.storage {
        StorageBackend::Postgres => postgres_repositories(&config.database).await?,
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data will not survive a restart");
            memory_repositories()
        }
    };

    let verifier = OidcTokenVerifier::new(
        OidcConfig::new(&config.auth.issuer_url, &config.auth.audience)
            .with_cache_ttl(config.auth.jwks_cache_ttl()),
    )?;

    let app = with_service_layers(
        api_router(ApiDependencies {
            users,
            trips,
            locations,
            verifier: Arc::new(verifier),
        }),
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_development() {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    }
}

async fn postgres_repositories(
    database: &DatabaseConfig,
) -> Result<Repositories, Box<dyn std::error::Error>> {
    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .idle_timeout(database.idle_timeout())
        .connect(&database.url)
        .await?;

    if database.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok((
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresTripRepository::new(pool.clone())),
        Arc::new(PostgresLocationRepository::new(pool)),
    ))
}

fn memory_repositories() -> Repositories {
    let store = InMemoryStore::new();
    (
        Arc::new(InMemoryUserRepository::new(store.clone())),
        Arc::new(InMemoryTripRepository::new(store.clone())),
        Arc::new(InMemoryLocationRepository::new(store)),
    )
}
