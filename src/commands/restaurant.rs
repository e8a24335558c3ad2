//INFO: Restaurant commands

use super::{require_restaurant, CommandOutput};
use crate::cli::RestaurantCommand;
use anyhow::Result;
use rusqlite::Connection;

pub fn execute(connection: &Connection, action: RestaurantCommand) -> Result<CommandOutput> {
    match action {
        RestaurantCommand::Reviews { id } => {
            let restaurant = require_restaurant(connection, id)?;
            CommandOutput::json(&restaurant.reviews(connection)?)
        }
        RestaurantCommand::Customers { id } => {
            let restaurant = require_restaurant(connection, id)?;
            CommandOutput::json(&restaurant.customers(connection)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_sample_data;
    use crate::models::test_connection;

    #[test]
    fn test_restaurant_customers() {
        let mut connection = test_connection();
        create_sample_data(&mut connection).unwrap();

        let output = execute(&connection, RestaurantCommand::Customers { id: 2 }).unwrap();
        assert_eq!(
            output,
            CommandOutput::Json(serde_json::json!([
                { "id": 2, "first_name": "Jane", "last_name": "Smith" }
            ]))
        );
    }

    #[test]
    fn test_unknown_restaurant() {
        let connection = test_connection();
        let error = execute(&connection, RestaurantCommand::Reviews { id: 5 }).unwrap_err();
        assert_eq!(error.to_string(), "Restaurant 5 not found");
    }
}
