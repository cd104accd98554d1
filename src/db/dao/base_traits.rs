use sea_orm::entity::prelude::DateTimeWithTimeZone;

/// Implemented by `#[base_entity]` for every entity carrying the store-managed
/// `id`/`created_at`/`updated_at` columns.
pub trait BaseEntity: sea_orm::EntityTrait {
    /// Name reported in `NotFound` errors.
    const NAME: &'static str;

    fn created_at_column() -> Self::Column;
}

pub trait BaseActiveModel {
    /// Sets the primary key and both timestamps of a row about to be inserted.
    fn stamp_new(&mut self, id: uuid::Uuid, now: DateTimeWithTimeZone);

    fn touch(&mut self, now: DateTimeWithTimeZone);
}
