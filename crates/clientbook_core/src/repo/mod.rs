//! Data access for client records.
//!
//! # Responsibility
//! - Keep SQL for the `clients` table behind a small repository contract.
//! - Report "not found" as a matchable error kind, separate from store
//!   failures.

pub mod client_repo;
