//! Client repository contract and its SQLite implementation.
//!
//! # Invariants
//! - Inserts never write a caller-supplied `id`; the store assigns it.
//! - A read either yields the complete row or nothing.
//! - Deleting an id with no row succeeds and changes nothing.

use crate::model::client::{Client, ClientId};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CLIENTS_TABLE: &str = "clients";
const REQUIRED_COLUMNS: &[&str] = &["id", "fio", "login", "birthday", "email"];

const CLIENT_SELECT_SQL: &str = "SELECT
    id,
    fio,
    login,
    birthday,
    email
FROM clients";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by client repository operations.
///
/// `NotFound` is the only semantic kind; everything the store reports
/// arrives unchanged inside `Db`.
#[derive(Debug)]
pub enum RepoError {
    NotFound(ClientId),
    Db(rusqlite::Error),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// Whether this error means the requested client does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "client not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted client data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(value)
    }
}

/// Create/read/delete contract over client records.
pub trait ClientRepository {
    /// Persists a new record and returns the id the store assigned.
    fn insert_client(&self, client: &Client) -> RepoResult<ClientId>;

    /// Looks up one record; `Ok(None)` when no row has this id.
    fn get_client(&self, id: ClientId) -> RepoResult<Option<Client>>;

    /// Removes the record if present. Missing ids are not an error.
    fn delete_client(&self, id: ClientId) -> RepoResult<()>;

    /// Like `get_client`, but reports a missing row as `RepoError::NotFound`.
    fn select_client(&self, id: ClientId) -> RepoResult<Client> {
        self.get_client(id)?.ok_or(RepoError::NotFound(id))
    }
}

/// SQLite-backed client repository borrowing a caller-owned connection.
pub struct SqliteClientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClientRepository<'conn> {
    /// Wraps a connection without inspecting it.
    ///
    /// Use this for connections produced by `db::open_db*`; use `try_new`
    /// when the connection comes from elsewhere.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps a connection after checking the `clients` table has every column.
    ///
    /// # Errors
    /// - `MissingRequiredTable` / `MissingRequiredColumn` for a foreign or
    ///   drifted schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_clients_schema(conn)?;
        Ok(Self { conn })
    }
}

impl ClientRepository for SqliteClientRepository<'_> {
    fn insert_client(&self, client: &Client) -> RepoResult<ClientId> {
        self.conn.execute(
            "INSERT INTO clients (fio, login, birthday, email) VALUES (?1, ?2, ?3, ?4);",
            params![
                client.fio.as_str(),
                client.login.as_str(),
                client.birthday.as_str(),
                client.email.as_str(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("event=client_insert module=repo status=ok client_id={id}");
        Ok(id)
    }

    fn get_client(&self, id: ClientId) -> RepoResult<Option<Client>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{CLIENT_SELECT_SQL} WHERE id = ?1;"))?;

        let row = stmt
            .query_row([id], |row| Ok(read_client_row(row)))
            .optional()?;

        match row {
            Some(parsed) => Ok(Some(parsed?)),
            None => {
                debug!("event=client_select module=repo status=miss client_id={id}");
                Ok(None)
            }
        }
    }

    fn delete_client(&self, id: ClientId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM clients WHERE id = ?1;", [id])?;
        debug!("event=client_delete module=repo status=ok client_id={id} changed={changed}");
        Ok(())
    }
}

/// Fetches the client with `id`, failing with `RepoError::NotFound` when absent.
///
/// Callers needing the zero value on a miss can use `unwrap_or_default()`.
pub fn select_client(conn: &Connection, id: ClientId) -> RepoResult<Client> {
    SqliteClientRepository::new(conn).select_client(id)
}

/// Inserts `client` and returns its new id. `client.id` is ignored.
pub fn insert_client(conn: &Connection, client: &Client) -> RepoResult<ClientId> {
    SqliteClientRepository::new(conn).insert_client(client)
}

/// Deletes the client with `id`; a missing id is a successful no-op.
pub fn delete_client(conn: &Connection, id: ClientId) -> RepoResult<()> {
    SqliteClientRepository::new(conn).delete_client(id)
}

fn read_client_row(row: &Row<'_>) -> RepoResult<Client> {
    Ok(Client {
        id: row.get("id")?,
        fio: required_text(row, "fio")?,
        login: required_text(row, "login")?,
        birthday: required_text(row, "birthday")?,
        email: required_text(row, "email")?,
    })
}

fn required_text(row: &Row<'_>, column: &str) -> RepoResult<String> {
    row.get::<_, Option<String>>(column)?
        .ok_or_else(|| RepoError::InvalidData(format!("NULL value in clients.{column}")))
}

fn ensure_clients_schema(conn: &Connection) -> RepoResult<()> {
    let table_exists = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [CLIENTS_TABLE],
            |_| Ok(()),
        )
        .optional()?
        .is_some();
    if !table_exists {
        return Err(RepoError::MissingRequiredTable(CLIENTS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let columns = stmt
        .query_map([CLIENTS_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .copied()
        .find(|required| !columns.iter().any(|name| name.as_str() == *required))
    {
        return Err(RepoError::MissingRequiredColumn {
            table: CLIENTS_TABLE,
            column: missing,
        });
    }

    Ok(())
}
