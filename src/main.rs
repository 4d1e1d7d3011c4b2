//! Server: reads settings, opens the database, applies migrations, serves the book and user routes.

use bookshelf::{app_router, apply_migrations, connect, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let pool = connect(&settings.database_url, settings.db_max_connections).await?;
    let applied = apply_migrations(&pool).await?;
    tracing::info!(
        database_url = %settings.database_url,
        migrations_applied = applied.len(),
        "database ready"
    );

    let state = AppState::new(pool.clone(), &settings);
    let app = app_router(state, settings.max_body_bytes);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
