//! Client record persistence over SQLite.
//!
//! Callers open a store with [`db::open_db`] or [`db::open_db_in_memory`],
//! own the returned connection, and pass it to the repository operations.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{open_db, open_db_in_memory, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::client::{Client, ClientId};
pub use repo::client_repo::{
    delete_client, insert_client, select_client, ClientRepository, RepoError, RepoResult,
    SqliteClientRepository,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
