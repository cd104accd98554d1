use anyhow::Context;
use sea_orm::DatabaseConnection;
use tracing::info;

use super::{providers, schema};
use crate::config::DatabaseConfig;

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let provider = providers::for_url(&cfg.url)?;
    info!(provider = provider.id().as_str(), "connecting to database");

    let db = provider
        .connect(cfg)
        .await
        .with_context(|| format!("failed to connect to {} database", provider.id().as_str()))?;
    provider.post_connect(&db, cfg).await?;

    schema::sync(&db)
        .await
        .context("failed to sync database schema")?;
    Ok(db)
}
