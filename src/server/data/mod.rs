//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by table (users, people, planets, favorites).

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
