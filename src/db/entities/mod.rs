#[allow(unused_imports)]
pub mod prelude {
    pub use super::token::Entity as Token;
    pub use super::user::Entity as User;
}

pub mod token;
pub mod user;
