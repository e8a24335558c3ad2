//INFO: Restaurant reviews library - restaurants, customers and their reviews over SQLite
//NOTE: This file wires together the modules and drives one CLI invocation

pub mod cli;
pub mod commands;
pub mod config;
pub mod database;
pub mod logging;
pub mod models;

use anyhow::Result;
use cli::Cli;
use config::Config;
use database::{initialize_database, Database};
use tracing::debug;

//INFO: Runs one command: set up logging, open the database, execute, print
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.database, cli.debug);
    logging::init_tracing(config.debug)?;
    debug!(?config, "configuration resolved");

    //INFO: Open the database and make sure the tables exist
    let database = Database::new(&config.database_path)?;
    initialize_database(&database.connection.lock())?;

    let output = commands::execute(&database, cli.command)?;
    println!("{}", output);

    Ok(())
}
