use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct PeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new person
    ///
    /// People are reference data created out-of-band (seed data, fixtures);
    /// there is no HTTP surface for this operation.
    pub async fn create(&self, name: &str, gender: &str) -> Result<entity::people::Model, DbErr> {
        let person = entity::people::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            gender: ActiveValue::Set(gender.to_string()),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<entity::people::Model>, DbErr> {
        entity::prelude::People::find_by_id(person_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::people::Model>, DbErr> {
        entity::prelude::People::find().all(self.db).await
    }
}
