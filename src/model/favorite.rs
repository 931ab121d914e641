use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A favorite association owned by a user.
///
/// Exactly one of `person_id` and `planet_id` is present; the unset side is
/// omitted from the JSON rather than serialized as null.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_id: Option<i32>,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            person_id: favorite.person_id,
            planet_id: favorite.planet_id,
        }
    }
}
