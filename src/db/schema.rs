use sea_orm::{DatabaseConnection, DbErr};
use tracing::info;

use super::entities::{token, user};

/// Creates or updates the `users` and `tokens` tables on `db`, including the
/// unique and foreign-key constraints declared on the entities.
pub async fn sync(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("syncing database schema from entities");
    db.get_schema_builder()
        .register(user::Entity)
        .register(token::Entity)
        .sync(db)
        .await
}
