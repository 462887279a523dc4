//! Difference-comparison query command.
//!
//! Reads from stdin: a comparison operator line, then two JSON arrays of
//! signed feature tags, one per line. Selects the languages where the
//! difference between the two feature counts satisfies the operator and
//! prints their identifiers as a JSON array.

use std::io;
use std::process::ExitCode;

use phono_query::Query;
use phono_query_executor::QueryExecutor;
use phono_query_store::{input, InventoryStore, INVENTORIES_FILE, PARSES_FILE};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = InventoryStore::load(INVENTORIES_FILE, PARSES_FILE)?;

    let mut stdin = io::stdin().lock();
    let op = input::read_operator(&mut stdin)?;
    let first = input::read_feature_tags(&mut stdin)?;
    let second = input::read_feature_tags(&mut stdin)?;

    let executor = QueryExecutor::new(&store);
    let result = executor.execute(&Query::comparison(first, second, op))?;
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
