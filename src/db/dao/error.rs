use sea_orm::{DbErr, SqlErr};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("Invalid pagination: page={page} page_size={page_size}")]
    InvalidPagination { page: u64, page_size: u64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

/// Integrity rule a write was rejected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    NotNull,
    ForeignKey,
    Unique,
}

impl DaoLayerError {
    /// Classifies a database error raised by a constraint. The error itself
    /// is kept as the database reported it.
    pub fn constraint(&self) -> Option<ConstraintViolation> {
        match self {
            DaoLayerError::Db(err) => classify(err),
            _ => None,
        }
    }
}

fn classify(err: &DbErr) -> Option<ConstraintViolation> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => return Some(ConstraintViolation::Unique),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            return Some(ConstraintViolation::ForeignKey);
        }
        _ => {}
    }

    // sea-orm has no typed variant for NOT NULL; match the sqlite and postgres wording.
    let message = err.to_string();
    if message.contains("NOT NULL constraint failed") || message.contains("violates not-null constraint")
    {
        return Some(ConstraintViolation::NotNull);
    }

    None
}
