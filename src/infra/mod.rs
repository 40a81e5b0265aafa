pub mod app;
pub mod config;
pub mod setup;

use sqlx::postgres::PgPoolOptions;

use crate::adapters::persistence::PostgresPersistence;

pub async fn postgres_persistence(database_url: &str) -> anyhow::Result<PostgresPersistence> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(PostgresPersistence { pool })
}
