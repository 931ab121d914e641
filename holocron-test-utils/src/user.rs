use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub async fn insert_mock_user(&self, email: &str) -> Result<entity::users::Model, TestError> {
        Ok(entity::prelude::Users::insert(entity::users::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set("test-password".to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.state.db)
        .await?)
    }
}
