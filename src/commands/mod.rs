//INFO: Command handlers for restaurant reviews
//NOTE: Each handler runs against one locked connection and returns printable output

pub mod customer;
pub mod demo;
pub mod restaurant;
pub mod review;

use crate::cli::Command;
use crate::database::queries::{
    get_all_customers, get_all_restaurants, get_customer, get_restaurant, get_review,
};
use crate::database::{create_sample_data, Database};
use crate::models::{Customer, Restaurant, Review};
use anyhow::{anyhow, Context, Result};
use rusqlite::Connection;
use serde::Serialize;
use std::fmt;

//INFO: What a command prints on success
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Text(String),
    Json(serde_json::Value),
}

impl CommandOutput {
    //INFO: Wraps any serializable value as JSON output
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).context("Failed to serialize command output")?;
        Ok(Self::Json(value))
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutput::Text(text) => f.write_str(text),
            //NOTE: `{:#}` pretty-prints a Value
            CommandOutput::Json(value) => write!(f, "{:#}", value),
        }
    }
}

//INFO: Runs one parsed command against the database
pub fn execute(database: &Database, command: Command) -> Result<CommandOutput> {
    let mut connection = database.connection.lock();

    match command {
        Command::Demo => demo::run_demo(&mut connection),
        Command::Seed => {
            let summary = create_sample_data(&mut connection)?;
            CommandOutput::json(&summary)
        }
        Command::Restaurants => CommandOutput::json(&get_all_restaurants(&connection)?),
        Command::Customers => CommandOutput::json(&get_all_customers(&connection)?),
        Command::Restaurant { action } => restaurant::execute(&connection, action),
        Command::Customer { action } => customer::execute(&connection, action),
        Command::Review { action } => review::execute(&connection, action),
    }
}

// ============================================================================
// Lookups that fail when the id is unknown
// ============================================================================

pub(crate) fn require_restaurant(connection: &Connection, id: i64) -> Result<Restaurant> {
    get_restaurant(connection, id)?.ok_or_else(|| anyhow!("Restaurant {} not found", id))
}

pub(crate) fn require_customer(connection: &Connection, id: i64) -> Result<Customer> {
    get_customer(connection, id)?.ok_or_else(|| anyhow!("Customer {} not found", id))
}

pub(crate) fn require_review(connection: &Connection, id: i64) -> Result<Review> {
    get_review(connection, id)?.ok_or_else(|| anyhow!("Review {} not found", id))
}
