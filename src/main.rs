use movie_rental::{
    adapters::postgres::{
        PgTransaction, PostgresMovieRepository, PostgresRentalRepository,
        PostgresTransactionProvider,
    },
    api::{handlers::AppState, router::create_router},
    application::{movie::MovieServiceDependencies, rental::RentalServiceDependencies},
    config::AppConfig,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_rental=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Initialize database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    // Initialize adapters
    let transaction_provider = Arc::new(PostgresTransactionProvider::new(pool.clone()));

    let movie_deps = MovieServiceDependencies::<PgTransaction> {
        movie_repository: Arc::new(PostgresMovieRepository::new()),
        transaction_provider: transaction_provider.clone(),
    };
    let rental_deps = RentalServiceDependencies::<PgTransaction> {
        rental_repository: Arc::new(PostgresRentalRepository::new()),
        transaction_provider,
    };

    // Create application state
    let app_state = Arc::new(AppState {
        movie_deps,
        rental_deps,
    });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
