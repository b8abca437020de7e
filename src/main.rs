use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coursebook::api::router;
use coursebook::config::Config;
use coursebook::db;
use coursebook::services::CatalogSeeder;
use coursebook::state::AppState;
use coursebook::uploads::LocalUploadStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "coursebook=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new_from_env()?;

    let pool = db::connect(&config.database_url).await?;
    db::migrate(&pool).await?;

    let stats = CatalogSeeder::new(pool.clone()).ensure_catalog().await?;
    info!(
        "catalog ready ({} departments, {} courses added)",
        stats.departments_added, stats.courses_added
    );

    let uploads = LocalUploadStore::new(&config.upload_dir).await?;
    info!("storing uploads in {}", uploads.root().display());

    if config.secret_key.is_none() {
        warn!("SECRET_KEY not set, using a random cookie key");
    }

    let state = AppState {
        db: pool.clone(),
        uploads: Arc::new(uploads),
        cookie_key: config.cookie_key(),
    };

    let app = router(state).layer(DefaultBodyLimit::max(config.max_upload_bytes));

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
