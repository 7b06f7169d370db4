//! SQLite storage layer for terra.
//!
//! All data lives in two tables, `countries` and `companies`, reached through
//! a shared [`sqlx::SqlitePool`]. The pool has an explicit lifecycle: it is
//! built once at startup by [`connect`], verified with a connectivity check,
//! and closed on shutdown. Schema migrations are embedded at compile time
//! from the `migrations/` directory and applied by [`run_migrations`].
//!
//! ## Components
//!
//! - [`CountryStore`]: CRUD operations for countries
//! - [`CompanyStore`]: CRUD operations for companies
//! - [`connect`] / [`ping`] / [`run_migrations`]: pool lifecycle
//!
//! Stores add no locking or retry logic on top of the pool; concurrent
//! writers rely on SQLite's own transaction isolation.

mod companies;
mod countries;
mod db;

pub use companies::CompanyStore;
pub use countries::CountryStore;
pub use db::{connect, ping, run_migrations};
