//! Crewboard server binary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crewboard::{
    config::CONFIG,
    db::{create_pool, run_migrations},
    services::SessionService,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CONFIG.clone();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = create_pool(&config.database).await?;
    run_migrations(&pool).await?;
    tracing::info!("Database ready at {}", config.database.url);

    SessionService::seed_administrator(&pool, &config.admin).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(pool, config);
    let app = crewboard::app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
