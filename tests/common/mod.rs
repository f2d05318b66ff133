//! Common test utilities for Cutover contract and scenario tests.
//!
//! This module provides:
//! - `FakeRemote`: an in-memory remote host behind the `Transfer` port
//! - Fixtures: configs, revision data and a staged release directory

#![allow(dead_code)]

pub mod fixtures;

pub use fake_remote::*;
pub use fixtures::*;
