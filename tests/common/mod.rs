//! Shared test helpers
//!
//! Provides utilities for integration tests:
//! - Chunker construction with adjusted bounds
//! - Temp document trees for pipeline tests

#![allow(dead_code)]

pub mod helpers;

pub use helpers::*;
