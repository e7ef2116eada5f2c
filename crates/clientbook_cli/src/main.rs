//! Smoke probe for `clientbook_core`.
//!
//! Runs one insert/select/delete cycle against an in-memory store and prints
//! a deterministic summary, so core wiring can be checked without a harness.

use clientbook_core::{
    core_version, delete_client, insert_client, open_db_in_memory, select_client, Client,
    RepoError,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("clientbook_core version={}", core_version());

    match run_cycle() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("clientbook smoke status=error error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run_cycle() -> Result<(), RepoError> {
    let conn = open_db_in_memory()?;

    let client = Client::new("Test", "Test", "19700101", "mail@mail.com");
    let id = insert_client(&conn, &client)?;
    println!("clientbook smoke insert id={id}");

    let loaded = select_client(&conn, id)?;
    println!("clientbook smoke select match={}", loaded == client.with_id(id));

    delete_client(&conn, id)?;
    let gone = matches!(select_client(&conn, id), Err(RepoError::NotFound(_)));
    println!("clientbook smoke delete gone={gone}");

    Ok(())
}
