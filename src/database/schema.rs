//INFO: Database schema definitions for restaurant reviews
//NOTE: Tables are created on first open; existing tables are left untouched

use anyhow::{Context, Result};
use rusqlite::Connection;

//INFO: Creates the restaurants, customers and reviews tables if they don't exist
pub fn initialize_database(connection: &Connection) -> Result<()> {
    //INFO: Create restaurants table
    connection
        .execute(
            "CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price INTEGER NOT NULL
        )",
            [],
        )
        .context("Failed to create restaurants table")?;

    //INFO: Create customers table
    connection
        .execute(
            "CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        )",
            [],
        )
        .context("Failed to create customers table")?;

    //INFO: Create reviews table
    //NOTE: No uniqueness on (customer_id, restaurant_id); a customer may review a restaurant repeatedly
    connection
        .execute(
            "CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_id INTEGER NOT NULL REFERENCES customers(id),
            restaurant_id INTEGER NOT NULL REFERENCES restaurants(id),
            star_rating INTEGER NOT NULL
        )",
            [],
        )
        .context("Failed to create reviews table")?;

    Ok(())
}
