pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod token_dao;
pub mod user_dao;

pub use base::{DaoBase, PaginatedResponse};
pub use base_traits::{BaseActiveModel, BaseEntity};
pub use context::DaoContext;
pub use error::{ConstraintViolation, DaoLayerError, DaoResult};
pub use token_dao::TokenDao;
pub use user_dao::UserDao;
