use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Users are created out-of-band (seed data, fixtures); there is no HTTP
    /// surface for this operation.
    pub async fn create(
        &self,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> Result<entity::users::Model, DbErr> {
        let user = entity::users::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password.to_string()),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::users::Model>, DbErr> {
        entity::prelude::Users::find_by_id(user_id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::users::Model>, DbErr> {
        entity::prelude::Users::find().all(self.db).await
    }
}
