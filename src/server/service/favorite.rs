//! Favorite management service layer.
//!
//! This module contains the business logic for linking users to the people and
//! planets they favorite. Every operation validates that the referenced user
//! and target exist before performing at most one write.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        favorite::FavoriteRepository, people::PeopleRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, catalog::CatalogError, favorite::FavoriteError, Error},
    model::favorite::FavoriteTarget,
};

/// Service for managing a user's favorite people and planets.
///
/// Mediates creation and removal of user-to-target associations. Each
/// operation is a single validate-then-mutate step; referential validity is
/// checked up front so a favorite can never point at a missing user, person,
/// or planet.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a target to a user's favorites.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user adding the favorite
    /// - `target` - The person or planet being favorited
    ///
    /// # Returns
    /// - `Ok(Model)` - The created favorite row
    /// - `Err(Error::AuthError)` - User not found in database
    /// - `Err(Error::CatalogError)` - Target person/planet not found
    /// - `Err(Error::FavoriteError)` - The pair is already favorited
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<entity::favorite::Model, Error> {
        self.ensure_user_exists(user_id).await?;
        self.ensure_target_exists(target).await?;

        let favorite_repository = FavoriteRepository::new(self.db);

        if favorite_repository
            .find_by_user_and_target(user_id, target)
            .await?
            .is_some()
        {
            return Err(FavoriteError::AlreadyInFavorites(target).into());
        }

        Ok(favorite_repository.create(user_id, target).await?)
    }

    /// Removes a target from a user's favorites.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user removing the favorite
    /// - `target` - The person or planet being unfavorited
    ///
    /// # Returns
    /// - `Ok(())` - The association was deleted
    /// - `Err(Error::AuthError)` - User not found in database
    /// - `Err(Error::CatalogError)` - Target person/planet not found
    /// - `Err(Error::FavoriteError)` - No such association exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<(), Error> {
        self.ensure_user_exists(user_id).await?;
        self.ensure_target_exists(target).await?;

        let favorite_repository = FavoriteRepository::new(self.db);

        let favorite = favorite_repository
            .find_by_user_and_target(user_id, target)
            .await?
            .ok_or(FavoriteError::NotInFavorites(target))?;

        favorite_repository.delete(favorite.id).await?;

        Ok(())
    }

    /// Lists all favorites owned by a user.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The user's favorite rows
    /// - `Err(Error::AuthError)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_user_favorites(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, Error> {
        self.ensure_user_exists(user_id).await?;

        Ok(FavoriteRepository::new(self.db)
            .list_by_user(user_id)
            .await?)
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        Ok(())
    }

    async fn ensure_target_exists(&self, target: FavoriteTarget) -> Result<(), Error> {
        match target {
            FavoriteTarget::Person(person_id) => {
                PeopleRepository::new(self.db)
                    .get_by_id(person_id)
                    .await?
                    .ok_or(CatalogError::PersonNotFound(person_id))?;
            }
            FavoriteTarget::Planet(planet_id) => {
                PlanetRepository::new(self.db)
                    .get_by_id(planet_id)
                    .await?
                    .ok_or(CatalogError::PlanetNotFound(planet_id))?;
            }
        }

        Ok(())
    }
}
