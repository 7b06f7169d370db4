//! GraphQL schema and resolvers for terra.
//!
//! Exposes the country/company registry over a single GraphQL endpoint.
//! Argument shapes and result nullability are declared by the Rust types;
//! requests that do not conform are rejected by the GraphQL layer before any
//! resolver (and therefore any storage call) runs.
//!
//! ## Schema
//!
//! - **Queries**: `getCountry`, `getCountries`, `getCompany`, `getCompanies`
//! - **Mutations**: `createCountry`, `createCountries`, `updateCountry`,
//!   `deleteCountry`, `createCompany`, `createCompanies`, `updateCompany`,
//!   `deleteCompany`
//!
//! Relations are navigable in both directions: `Country.companies` and
//! `Company.country` resolve against the store when requested.

mod schema;
mod types;

pub use schema::{TerraSchema, build_schema};
pub use types::*;
