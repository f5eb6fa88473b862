use secrecy::{ExposeSecret, Secret};
use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};

pub mod app_state;
pub mod domain;
pub mod operations;
pub mod services;
pub mod utils;

pub use app_state::AppState;

pub async fn get_postgres_pool(
    url: &Secret<String>,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url.expose_secret())
        .await
}

#[tracing::instrument(name = "Running database migrations", skip_all)]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}
