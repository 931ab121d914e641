//! Tests for favorite controller endpoints.
//!
//! This module contains integration tests for the favorite management HTTP
//! endpoints, covering creation and removal of person and planet favorites for
//! the current session user.

mod add_favorite_planet;
mod remove_favorite_person;

use super::*;
