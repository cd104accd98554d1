pub const DEFAULT_RUST_LOG: &str = "info,sea_orm=warn,sqlx=warn";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://token_store.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 2;
