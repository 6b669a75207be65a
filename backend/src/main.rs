use std::sync::Arc;
use backend::{build_rocket, config::Config, queries::PgVoteStore, routes::AppState};
use shuttle_runtime::{CustomError, SecretStore};
use sqlx::PgPool;
use tracing::info;

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting survey vote server");

    let config = Config::from_secrets(&secret_store).map_err(CustomError::new)?;

    let store = PgVoteStore::new(pool, config.table.clone());
    store.ensure_table().await.map_err(CustomError::new)?;

    info!("📋 Vote table {} ready", config.table);

    let app_state = AppState::from_config(Arc::new(store), &config);
    Ok(build_rocket(app_state).into())
}
