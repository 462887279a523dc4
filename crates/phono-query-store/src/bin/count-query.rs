//! Feature-count query command.
//!
//! Reads from stdin: a comparison operator line, an integer target line,
//! and a JSON array of signed feature tags. Selects the languages whose
//! matching-segment count compares to the target as requested and prints
//! their identifiers as a JSON array.

use std::io;
use std::process::ExitCode;

use phono_query::Query;
use phono_query_executor::QueryExecutor;
use phono_query_store::{input, InventoryStore, INVENTORIES_FILE, PARSES_FILE};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = InventoryStore::load(INVENTORIES_FILE, PARSES_FILE)?;

    let mut stdin = io::stdin().lock();
    let op = input::read_operator(&mut stdin)?;
    let target = input::read_target(&mut stdin)?;
    let features = input::read_feature_tags(&mut stdin)?;

    let executor = QueryExecutor::new(&store);
    let result = executor.execute(&Query::count(features, op, target))?;
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
