use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::{token, user};

#[derive(Clone)]
pub struct TokenDao {
    db: DatabaseConnection,
}

impl DaoBase for TokenDao {
    type Entity = token::Entity;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TokenDao {
    /// Stores `refresh_token` for `user_id`.
    ///
    /// Fails with a foreign-key violation when the user does not exist and a
    /// uniqueness violation when the user already has a token.
    pub async fn create_for_user(
        &self,
        user_id: &Uuid,
        refresh_token: &str,
    ) -> DaoResult<token::Model> {
        let model = token::ActiveModel {
            refresh_token: Set(refresh_token.to_string()),
            user_id: Set(*user_id),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_by_user(&self, user_id: &Uuid) -> DaoResult<Option<token::Model>> {
        let user_id = *user_id;
        self.find_one(move |query| query.filter(token::Column::UserId.eq(user_id)))
            .await
    }

    pub async fn find_by_refresh_token(&self, value: &str) -> DaoResult<Option<token::Model>> {
        let value = value.to_string();
        self.find_one(move |query| query.filter(token::Column::RefreshToken.eq(value)))
            .await
    }

    /// Owner of `token`. The foreign key guarantees one exists, so a missing
    /// row is reported as `NotFound`.
    pub async fn user_of(&self, token: &token::Model) -> DaoResult<user::Model> {
        token
            .find_related(user::Entity)
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)?
            .ok_or(DaoLayerError::NotFound {
                entity: "user",
                id: token.user_id,
            })
    }

    pub async fn set_refresh_token(&self, id: &Uuid, value: &str) -> DaoResult<token::Model> {
        let value = value.to_string();
        self.update(*id, move |active| {
            active.refresh_token = Set(value);
        })
        .await
    }

    /// Number of rows removed; zero when the user had no token.
    pub async fn delete_for_user(&self, user_id: &Uuid) -> DaoResult<u64> {
        token::Entity::delete_many()
            .filter(token::Column::UserId.eq(*user_id))
            .exec(&self.db)
            .await
            .map(|result| result.rows_affected)
            .map_err(DaoLayerError::Db)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use crate::db::entities::{token, user};

    use super::TokenDao;
    use crate::db::dao::{ConstraintViolation, DaoBase, DaoLayerError};

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn token_model(refresh_token: &str, user_id: Uuid) -> token::Model {
        let now = ts();
        token::Model {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            refresh_token: refresh_token.to_string(),
            user_id,
        }
    }

    fn user_model(id: Uuid) -> user::Model {
        let now = ts();
        user::Model {
            id,
            created_at: now,
            updated_at: now,
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn create_for_user_returns_inserted_row() {
        let user_id = Uuid::new_v4();
        let stored = token_model("refresh-1", user_id);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[stored.clone()]])
            .into_connection();
        let dao = TokenDao::new(&db);

        let token = dao
            .create_for_user(&user_id, "refresh-1")
            .await
            .expect("insert should succeed");
        assert_eq!(token.refresh_token, "refresh-1");
        assert_eq!(token.user_id, user_id);
    }

    #[tokio::test]
    async fn create_for_user_surfaces_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "null value in column \"refresh_token\" of relation \"tokens\" violates not-null constraint"
                    .to_string(),
            )])
            .into_connection();
        let dao = TokenDao::new(&db);

        let err = dao
            .create_for_user(&Uuid::new_v4(), "refresh-1")
            .await
            .expect_err("insert should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
        assert_eq!(err.constraint(), Some(ConstraintViolation::NotNull));
    }

    #[tokio::test]
    async fn find_by_user_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<token::Model>::new()])
            .into_connection();
        let dao = TokenDao::new(&db);

        let result = dao
            .find_by_user(&Uuid::new_v4())
            .await
            .expect("query should succeed");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn find_by_refresh_token_returns_match() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[token_model("refresh-2", user_id)]])
            .into_connection();
        let dao = TokenDao::new(&db);

        let token = dao
            .find_by_refresh_token("refresh-2")
            .await
            .expect("query should succeed")
            .expect("token should exist");
        assert_eq!(token.user_id, user_id);
    }

    #[tokio::test]
    async fn user_of_follows_foreign_key() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model(user_id)]])
            .into_connection();
        let dao = TokenDao::new(&db);

        let owner = dao
            .user_of(&token_model("refresh-3", user_id))
            .await
            .expect("owner should load");
        assert_eq!(owner.id, user_id);
    }

    #[tokio::test]
    async fn user_of_reports_missing_owner() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let dao = TokenDao::new(&db);

        let err = dao
            .user_of(&token_model("refresh-4", user_id))
            .await
            .expect_err("owner lookup should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "user", id } if id == user_id
        ));
    }

    #[tokio::test]
    async fn set_refresh_token_propagates_not_found() {
        let missing_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<token::Model>::new()])
            .into_connection();
        let dao = TokenDao::new(&db);

        let err = dao
            .set_refresh_token(&missing_id, "refresh-5")
            .await
            .expect_err("update should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "token", id } if id == missing_id
        ));
    }

    #[tokio::test]
    async fn delete_for_user_reports_rows_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let dao = TokenDao::new(&db);

        let removed = dao
            .delete_for_user(&Uuid::new_v4())
            .await
            .expect("delete should succeed");
        assert_eq!(removed, 1);
    }

    #[tokio::test]
    async fn delete_for_user_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("delete failed".to_string())])
            .into_connection();
        let dao = TokenDao::new(&db);

        let err = dao
            .delete_for_user(&Uuid::new_v4())
            .await
            .expect_err("delete should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
        assert_eq!(err.constraint(), None);
    }
}
