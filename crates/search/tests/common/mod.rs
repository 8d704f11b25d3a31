//! Common test utilities for search model testing.
//!
//! - [`engine`] - In-memory recording engine
//! - [`fixtures`] - Test documents and options

#![allow(dead_code)]

pub mod engine;
pub mod fixtures;
