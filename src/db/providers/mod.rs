mod postgres;
mod sqlite;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use self::{postgres::PostgresDbProvider, sqlite::SqliteDbProvider};
use crate::config::DatabaseConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProviderId {
    Postgres,
    Sqlite,
}

impl DbProviderId {
    pub fn as_str(self) -> &'static str {
        match self {
            DbProviderId::Postgres => "postgres",
            DbProviderId::Sqlite => "sqlite",
        }
    }
}

/// Backend-specific connect logic. `post_connect` runs once on the fresh
/// pool, before the schema is synced.
#[async_trait]
pub trait DbProvider: Send + Sync {
    fn id(&self) -> DbProviderId;
    fn supports_url(&self, url: &str) -> bool;
    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection>;
    async fn post_connect(&self, _db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<()> {
        Ok(())
    }
}

/// Provider for the scheme of `url`; postgres is tried before sqlite.
pub fn for_url(url: &str) -> Result<Box<dyn DbProvider>> {
    let candidates: [Box<dyn DbProvider>; 2] =
        [Box::new(PostgresDbProvider), Box::new(SqliteDbProvider)];

    candidates
        .into_iter()
        .find(|provider| provider.supports_url(url))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "unsupported database url '{}'; expected scheme postgres://, postgresql://, or sqlite:",
                redact_url(url)
            )
        })
}

fn redact_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some((scheme, _)) = trimmed.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = trimmed.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}
