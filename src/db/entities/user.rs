use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(name = "user")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    #[sea_orm(has_one)]
    pub token: HasOne<super::token::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
