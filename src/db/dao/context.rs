use sea_orm::DatabaseConnection;

use super::{DaoBase, TokenDao, UserDao};

/// Hands out DAOs bound to one injected connection.
#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn token(&self) -> TokenDao {
        DaoBase::new(&self.db)
    }
}
