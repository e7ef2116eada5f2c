//! SQLite store bootstrap for client records.
//!
//! Connections handed out here already have the `clients` table. Store
//! failures surface as the untouched `rusqlite::Error`.

mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = rusqlite::Result<T>;
