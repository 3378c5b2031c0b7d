use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use contact_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = contact_api::config::config();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| panic!("DATABASE_URL is not set"));

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout_secs))
        .connect(&database_url)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

    sqlx::migrate!()
        .run(&pool)
        .await
        .unwrap_or_else(|e| panic!("failed to run migrations: {}", e));

    let app = contact_api::app(AppState::postgres(pool));

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("contact-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
