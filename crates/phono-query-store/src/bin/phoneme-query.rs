//! Phoneme-presence query command.
//!
//! Reads from stdin: a comparison operator line, an integer target line,
//! and a phoneme line. Selects the languages whose presence count (1 if
//! the phoneme occurs in the inventory, else 0) compares to the target as
//! requested and prints their identifiers as a JSON array.
//!
//! Only the inventory cache is loaded; phoneme queries never consult the
//! parse table.

use std::io;
use std::process::ExitCode;

use phono_query::Query;
use phono_query_executor::QueryExecutor;
use phono_query_store::{input, InventoryStore, INVENTORIES_FILE};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = InventoryStore::load_inventories(INVENTORIES_FILE)?;

    let mut stdin = io::stdin().lock();
    let op = input::read_operator(&mut stdin)?;
    let target = input::read_target(&mut stdin)?;
    let phoneme = input::read_phoneme(&mut stdin)?;

    let executor = QueryExecutor::new(&store);
    let result = executor.execute(&Query::phoneme(phoneme, op, target))?;
    println!("{}", serde_json::to_string(&result.to_vec())?);
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
