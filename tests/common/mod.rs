//! Common test infrastructure for HTTP integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file.

#![allow(dead_code)]

pub mod app;
pub mod fixtures;

pub use app::{TestApp, TestResponse};
