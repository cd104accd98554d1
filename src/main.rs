use token_store::{config::AppConfig, db::connection, logging::init_tracing};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("schema sync failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().expect("failed to load config");
    init_tracing(&cfg.logging.rust_log);

    let db = connection::connect(&cfg.database).await?;
    tracing::info!(
        backend = ?db.get_database_backend(),
        "users and tokens tables are up to date"
    );

    db.close().await?;
    Ok(())
}
