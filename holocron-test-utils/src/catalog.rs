use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub async fn insert_mock_person(
        &self,
        name: &str,
        gender: &str,
    ) -> Result<entity::people::Model, TestError> {
        Ok(entity::prelude::People::insert(entity::people::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            gender: ActiveValue::Set(gender.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.state.db)
        .await?)
    }

    pub async fn insert_mock_planet(
        &self,
        name: &str,
        climate: &str,
    ) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set(climate.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.state.db)
        .await?)
    }
}
