//! Data models for terra.
//!
//! This module defines the persisted entities and their input shapes:
//!
//! - [`Country`]: a country keyed by a caller-supplied code (e.g. "IDN")
//! - [`Company`]: a company with an auto-generated numeric ID, optionally
//!   registered in a country
//! - [`NewCountry`] / [`NewCompany`]: creation inputs
//! - [`CountryPatch`] / [`CompanyPatch`]: partial-update inputs where `None`
//!   means "leave unchanged"

mod company;
mod country;

pub use company::{Company, CompanyPatch, NewCompany};
pub use country::{Country, CountryPatch, NewCountry};
