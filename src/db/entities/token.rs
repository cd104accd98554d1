use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

/// Refresh token held for a single user.
///
/// `user_id` is unique, so a user owns at most one row here.
#[base_entity(name = "token")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "tokens")]
pub struct Model {
    pub refresh_token: String,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
