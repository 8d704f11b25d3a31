//! Common test utilities for the plugin's HTTP layer.
//!
//! - [`engine`] - Scripted in-memory search engine
//! - [`harness`] - Test server construction

#![allow(dead_code)]

pub mod engine;
pub mod harness;
