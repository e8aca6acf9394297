//! Server binary: picks the store from `DATABASE_URL` (PostgreSQL when set,
//! in-memory otherwise), seeds sample data, mounts common and API routes.

use axum::Router;
use taproom::{
    api_routes, common_routes, ensure_database_exists, ensure_tables, load_seed_data, AppState,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("taproom=info,tower_http=info")),
        )
        .init();

    let state = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            ensure_database_exists(&database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;
            ensure_tables(&pool).await?;
            tracing::info!("using postgres store");
            AppState::with_pool(pool)
        }
        Err(_) => {
            tracing::info!("DATABASE_URL not set, using in-memory store");
            AppState::in_memory()
        }
    };

    load_seed_data(&state).await?;

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/v1", api_routes(state))
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
