//! Client domain model.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes afterwards.
//! - Ids of deleted clients are never handed out again.
//! - `Client::default()` is the zero value: `id == 0`, all text empty.

use serde::{Deserialize, Serialize};

/// Store-assigned client identifier. Positive once persisted.
pub type ClientId = i64;

/// A person record kept in the `clients` table.
///
/// Text fields are stored verbatim; the store performs no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Zero until the record has been inserted.
    pub id: ClientId,
    /// Full name.
    pub fio: String,
    pub login: String,
    /// `YYYYMMDD`, kept as text.
    pub birthday: String,
    pub email: String,
}

impl Client {
    /// Builds an unsaved client (`id == 0`).
    pub fn new(
        fio: impl Into<String>,
        login: impl Into<String>,
        birthday: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            fio: fio.into(),
            login: login.into(),
            birthday: birthday.into(),
            email: email.into(),
        }
    }

    /// Returns a copy carrying the given store-assigned id.
    pub fn with_id(mut self, id: ClientId) -> Self {
        self.id = id;
        self
    }

    /// Whether the store has assigned an id to this record.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}
