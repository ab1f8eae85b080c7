use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use vibetrip::config::AppConfig;
use vibetrip::db::init_pool;
use vibetrip::error::AppError;
use vibetrip::routes::create_router;
use vibetrip::services::planner::{HfRouterBackend, PlannerService};
use vibetrip::services::trips::TripStore;
use vibetrip::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;
    if config.hf_token.is_none() {
        warn!("HF_TOKEN is not set; plan generation will fail until it is configured");
    }

    let db = init_pool(&config.database_url).await?;

    if let Err(err) = sqlx::migrate!("./migrations").run(&db).await {
        error!("migration failed: {err:?}");
        return Err(AppError::Other(err.into()));
    }

    let planner = PlannerService::new(Arc::new(HfRouterBackend::new(&config)));
    let trips = TripStore::new(db.clone());

    let state = AppState::new(config.clone(), db, planner, trips);
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,vibetrip=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
