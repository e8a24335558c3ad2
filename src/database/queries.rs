//INFO: Database query functions for restaurant reviews
//NOTE: Inserts, single-row lookups and listings for each table, plus the row mappers the accessors share

use crate::models::{Customer, Restaurant, Review};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

// ============================================================================
// Row Mapping
// ============================================================================

//INFO: Builds a Restaurant from a row with `id`, `name` and `price` columns
pub fn restaurant_from_row(row: &Row) -> rusqlite::Result<Restaurant> {
    Ok(Restaurant {
        id: row.get("id")?,
        name: row.get("name")?,
        price: row.get("price")?,
    })
}

//INFO: Builds a Customer from a row with `id`, `first_name` and `last_name` columns
pub fn customer_from_row(row: &Row) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    })
}

//INFO: Builds a Review from a row with `id`, `customer_id`, `restaurant_id` and `star_rating` columns
pub fn review_from_row(row: &Row) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get("id")?,
        customer_id: row.get("customer_id")?,
        restaurant_id: row.get("restaurant_id")?,
        star_rating: row.get("star_rating")?,
    })
}

// ============================================================================
// Restaurant Queries
// ============================================================================

//INFO: Inserts a restaurant and returns it with its new id
pub fn insert_restaurant(connection: &Connection, name: &str, price: i64) -> Result<Restaurant> {
    connection
        .execute(
            "INSERT INTO restaurants (name, price) VALUES (?1, ?2)",
            params![name, price],
        )
        .context("Failed to insert restaurant")?;

    let id = connection.last_insert_rowid();
    debug!(id, restaurant = name, price, "restaurant inserted");

    Ok(Restaurant {
        id,
        name: name.to_string(),
        price,
    })
}

//INFO: Gets a restaurant by id
//NOTE: Returns None if no row matches
pub fn get_restaurant(connection: &Connection, id: i64) -> Result<Option<Restaurant>> {
    connection
        .query_row(
            "SELECT id, name, price FROM restaurants WHERE id = ?1",
            params![id],
            restaurant_from_row,
        )
        .optional()
        .context("Failed to query restaurant")
}

//INFO: Gets every restaurant, ordered by id
pub fn get_all_restaurants(connection: &Connection) -> Result<Vec<Restaurant>> {
    let mut statement = connection
        .prepare("SELECT id, name, price FROM restaurants ORDER BY id")
        .context("Failed to prepare restaurants query")?;

    let rows = statement
        .query_map([], restaurant_from_row)
        .context("Failed to query restaurants")?;

    let mut restaurants = Vec::new();
    for row in rows {
        restaurants.push(row.context("Failed to parse restaurant")?);
    }

    Ok(restaurants)
}

// ============================================================================
// Customer Queries
// ============================================================================

//INFO: Inserts a customer and returns it with its new id
pub fn insert_customer(
    connection: &Connection,
    first_name: &str,
    last_name: &str,
) -> Result<Customer> {
    connection
        .execute(
            "INSERT INTO customers (first_name, last_name) VALUES (?1, ?2)",
            params![first_name, last_name],
        )
        .context("Failed to insert customer")?;

    let id = connection.last_insert_rowid();
    debug!(id, first_name, last_name, "customer inserted");

    Ok(Customer {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
}

//INFO: Gets a customer by id
//NOTE: Returns None if no row matches
pub fn get_customer(connection: &Connection, id: i64) -> Result<Option<Customer>> {
    connection
        .query_row(
            "SELECT id, first_name, last_name FROM customers WHERE id = ?1",
            params![id],
            customer_from_row,
        )
        .optional()
        .context("Failed to query customer")
}

//INFO: Gets every customer, ordered by id
pub fn get_all_customers(connection: &Connection) -> Result<Vec<Customer>> {
    let mut statement = connection
        .prepare("SELECT id, first_name, last_name FROM customers ORDER BY id")
        .context("Failed to prepare customers query")?;

    let rows = statement
        .query_map([], customer_from_row)
        .context("Failed to query customers")?;

    let mut customers = Vec::new();
    for row in rows {
        customers.push(row.context("Failed to parse customer")?);
    }

    Ok(customers)
}

// ============================================================================
// Review Queries
// ============================================================================

//INFO: Inserts a review and returns it with its new id
//NOTE: The rating is stored as given; dangling ids fail on the foreign key constraints
pub fn insert_review(
    connection: &Connection,
    customer_id: i64,
    restaurant_id: i64,
    star_rating: i64,
) -> Result<Review> {
    connection
        .execute(
            "INSERT INTO reviews (customer_id, restaurant_id, star_rating) VALUES (?1, ?2, ?3)",
            params![customer_id, restaurant_id, star_rating],
        )
        .context("Failed to insert review")?;

    let id = connection.last_insert_rowid();
    debug!(id, customer_id, restaurant_id, star_rating, "review inserted");

    Ok(Review {
        id,
        customer_id,
        restaurant_id,
        star_rating,
    })
}

//INFO: Gets a review by id
//NOTE: Returns None if no row matches
pub fn get_review(connection: &Connection, id: i64) -> Result<Option<Review>> {
    connection
        .query_row(
            "SELECT id, customer_id, restaurant_id, star_rating FROM reviews WHERE id = ?1",
            params![id],
            review_from_row,
        )
        .optional()
        .context("Failed to query review")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_connection as setup;

    #[test]
    fn test_insert_and_get_restaurant() {
        let connection = setup();
        let inserted = insert_restaurant(&connection, "Restaurant A", 3).unwrap();

        let fetched = get_restaurant(&connection, inserted.id).unwrap();
        assert_eq!(fetched, Some(inserted));
    }

    #[test]
    fn test_missing_rows_are_absent() {
        let connection = setup();
        assert_eq!(get_restaurant(&connection, 42).unwrap(), None);
        assert_eq!(get_customer(&connection, 42).unwrap(), None);
        assert_eq!(get_review(&connection, 42).unwrap(), None);
    }

    #[test]
    fn test_listings_are_ordered_by_id() {
        let connection = setup();
        insert_customer(&connection, "John", "Doe").unwrap();
        insert_customer(&connection, "Jane", "Smith").unwrap();

        let customers = get_all_customers(&connection).unwrap();
        let names: Vec<_> = customers.iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
        assert!(customers[0].id < customers[1].id);
    }

    #[test]
    fn test_insert_review_with_dangling_ids_fails() {
        let connection = setup();
        let error = insert_review(&connection, 7, 9, 4).unwrap_err();

        let sqlite_error = error.downcast_ref::<rusqlite::Error>().unwrap();
        assert_eq!(
            sqlite_error.sqlite_error_code(),
            Some(rusqlite::ErrorCode::ConstraintViolation)
        );
    }

    #[test]
    fn test_insert_review_keeps_unvalidated_rating() {
        let connection = setup();
        let restaurant = insert_restaurant(&connection, "Restaurant A", 3).unwrap();
        let customer = insert_customer(&connection, "John", "Doe").unwrap();

        let review = insert_review(&connection, customer.id, restaurant.id, -2).unwrap();
        let fetched = get_review(&connection, review.id).unwrap().unwrap();
        assert_eq!(fetched.star_rating, -2);
    }
}
