//! # Terra - a country/company registry with a GraphQL API
//!
//! Terra stores countries and the companies registered in them in SQLite and
//! exposes them through a single GraphQL endpoint. Countries are keyed by a
//! caller-supplied code (e.g. "IDN"); companies get auto-generated numeric
//! IDs and reference their country by foreign key.
//!
//! ## Quick Start
//!
//! ```bash
//! # Apply migrations
//! terra migrate
//!
//! # Start the GraphQL server (GraphiQL on http://localhost:4000/graphql)
//! terra serve
//!
//! # Run an operation from the command line
//! terra query '{ getCountries { id name code } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`model`]: Data models (Country, Company, and their input shapes)
//! - [`server`]: Axum HTTP transport
//! - [`storage`]: SQLite pool lifecycle and per-entity stores
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `terra.toml` configuration files and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `TerraError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema for querying and mutating the registry.
pub mod graphql;

pub mod logging;

/// Data models.
///
/// Includes `Country`, `Company`, and their creation/patch inputs.
pub mod model;

/// HTTP transport.
///
/// Axum router serving `/graphql` and `/health`.
pub mod server;

/// SQLite storage layer.
///
/// Pool lifecycle plus `CountryStore` and `CompanyStore`.
pub mod storage;

/// Input validation utilities.
///
/// Validates IDs and required text fields before they reach storage.
pub mod validation;
