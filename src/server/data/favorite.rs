use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::server::model::favorite::FavoriteTarget;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite linking a user to a target
    ///
    /// This is the only writer of the favorite table; the target column pair
    /// is derived from [`FavoriteTarget`], so exactly one of `person_id` and
    /// `planet_id` is ever set.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<entity::favorite::Model, DbErr> {
        let mut favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        match target {
            FavoriteTarget::Person(person_id) => {
                favorite.person_id = ActiveValue::Set(Some(person_id));
            }
            FavoriteTarget::Planet(planet_id) => {
                favorite.planet_id = ActiveValue::Set(Some(planet_id));
            }
        }

        favorite.insert(self.db).await
    }

    pub async fn find_by_user_and_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        let query =
            entity::prelude::Favorite::find().filter(entity::favorite::Column::UserId.eq(user_id));

        let query = match target {
            FavoriteTarget::Person(person_id) => {
                query.filter(entity::favorite::Column::PersonId.eq(person_id))
            }
            FavoriteTarget::Planet(planet_id) => {
                query.filter(entity::favorite::Column::PlanetId.eq(planet_id))
            }
        };

        query.one(self.db).await
    }

    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
