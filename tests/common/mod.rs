//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Sample texts and logs
//! - A builder for synthetic logs
//! - Domain-specific assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
