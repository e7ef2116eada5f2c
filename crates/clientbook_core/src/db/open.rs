//! Connection bootstrap for the client store.
//!
//! Every connection returned from here has the `clients` table in place and
//! a busy timeout configured. Ownership passes to the caller, who releases it
//! by dropping the `Connection`.

use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CLIENTS_SCHEMA_SQL: &str = include_str!("schema.sql");

/// Opens (or creates) a file-backed client store.
///
/// # Side effects
/// - Creates the database file when it does not exist yet.
/// - Emits `db_open` events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with("file", || Connection::open(path))
}

/// Opens an ephemeral client store that lives as long as the connection.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &'static str,
    connect: impl FnOnce() -> DbResult<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let conn = connect().map_err(|err| {
        error!(
            "event=db_open module=db status=error mode={} duration_ms={} error_code=db_open_failed error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        );
        err
    })?;

    if let Err(err) = bootstrap_connection(&conn) {
        error!(
            "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        );
        return Err(err);
    }

    info!(
        "event=db_open module=db status=ok mode={} duration_ms={}",
        mode,
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

/// Idempotent: the schema uses `CREATE TABLE IF NOT EXISTS`.
fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.execute_batch(CLIENTS_SCHEMA_SQL)
}

#[cfg(test)]
mod tests {
    use super::bootstrap_connection;
    use rusqlite::Connection;

    #[test]
    fn bootstrap_twice_keeps_existing_rows() {
        let conn = Connection::open_in_memory().unwrap();
        bootstrap_connection(&conn).unwrap();
        conn.execute(
            "INSERT INTO clients (fio, login, birthday, email) VALUES ('a', 'b', 'c', 'd');",
            [],
        )
        .unwrap();

        bootstrap_connection(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM clients;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
