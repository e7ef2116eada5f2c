//! Domain records persisted by the client store.

pub mod client;
