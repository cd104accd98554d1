use sea_orm::{ColumnTrait, DatabaseConnection, ModelTrait, QueryFilter, Set};

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::{token, user};

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = user::Entity;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        let email = email.to_string();
        self.find_one(move |query| query.filter(user::Column::Email.eq(email)))
            .await
    }

    pub async fn create_user(&self, email: &str, password_hash: &str) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn token_of(&self, user: &user::Model) -> DaoResult<Option<token::Model>> {
        user.find_related(token::Entity)
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }
}
