//! Holocron: a star-catalog blog backend.
//!
//! Exposes a JSON HTTP API over four relational tables (users, people,
//! planet, favorite). The interesting part is favorite management: linking
//! the current user to a person or planet after validating that both sides
//! of the association exist.

pub mod model;
pub mod server;
