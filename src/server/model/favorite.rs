use std::fmt;

/// The target of a favorite association: exactly one person or one planet.
///
/// This tagged variant is the only way favorite rows are created, so a
/// favorite with zero or two targets is unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Person(i32),
    Planet(i32),
}

impl FavoriteTarget {
    /// The ID of the referenced person or planet.
    pub fn id(self) -> i32 {
        match self {
            Self::Person(id) | Self::Planet(id) => id,
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(id) => write!(f, "Person ID {}", id),
            Self::Planet(id) => write!(f, "Planet ID {}", id),
        }
    }
}
