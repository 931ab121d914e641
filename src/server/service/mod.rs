//! Service layer for business logic.
//!
//! This module contains the service layer that implements business logic and
//! coordinates between repositories. The favorite service mediates creation and
//! removal of user-to-target associations, enforcing referential validity
//! before touching storage.

pub mod favorite;
