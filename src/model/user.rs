use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user account, serialized without the password column.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl From<entity::users::Model> for UserDto {
    fn from(user: entity::users::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}
