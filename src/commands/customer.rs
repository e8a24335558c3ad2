//INFO: Customer commands

use super::{require_customer, CommandOutput};
use crate::cli::CustomerCommand;
use anyhow::Result;
use rusqlite::Connection;

pub fn execute(connection: &Connection, action: CustomerCommand) -> Result<CommandOutput> {
    match action {
        CustomerCommand::Reviews { id } => {
            let customer = require_customer(connection, id)?;
            CommandOutput::json(&customer.reviews(connection)?)
        }
        CustomerCommand::Restaurants { id } => {
            let customer = require_customer(connection, id)?;
            CommandOutput::json(&customer.restaurants(connection)?)
        }
        CustomerCommand::Favorite { id } => {
            let customer = require_customer(connection, id)?;
            //NOTE: Prints `null` for a customer without reviews
            CommandOutput::json(&customer.favorite_restaurant(connection)?)
        }
        CustomerCommand::Name { id } => {
            let customer = require_customer(connection, id)?;
            Ok(CommandOutput::Text(customer.full_name()))
        }
    }
}
