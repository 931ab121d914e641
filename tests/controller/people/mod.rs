//! Tests for people controller endpoints.
//!
//! This module contains integration tests for the people catalog HTTP endpoints,
//! covering listing and single-person retrieval.

mod get_person;

use super::*;
