//! # Locale Common
//!
//! Shared types, logging setup and test helpers for the locale table crates.
//!
//! This crate provides the workspace-wide error type and the tracing
//! initialisation used by hosts embedding the locale tables.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::*;
pub use types::*;
