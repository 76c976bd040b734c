//! # Locale Config
//!
//! Type-safe configuration for hosts that load locale string tables.
//!
//! This crate provides configuration loading from TOML, YAML or JSON files,
//! environment overrides, validation, and the glue that turns a validated
//! configuration into a ready [`locale_i18n::LocaleRegistry`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
