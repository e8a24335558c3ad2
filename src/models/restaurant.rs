//INFO: Restaurant entity and its review accessors

use crate::database::queries::{customer_from_row, review_from_row};
use crate::models::{Customer, Review};
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

//INFO: Restaurant data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

impl Restaurant {
    //INFO: Gets every review left for this restaurant
    pub fn reviews(&self, connection: &Connection) -> Result<Vec<Review>> {
        let mut statement = connection
            .prepare(
                "SELECT id, customer_id, restaurant_id, star_rating
             FROM reviews
             WHERE restaurant_id = ?1
             ORDER BY id",
            )
            .context("Failed to prepare restaurant reviews query")?;

        let rows = statement
            .query_map(params![self.id], review_from_row)
            .context("Failed to query restaurant reviews")?;

        let mut reviews = Vec::new();
        for row in rows {
            reviews.push(row.context("Failed to parse review")?);
        }

        Ok(reviews)
    }

    //INFO: Gets the customers who reviewed this restaurant
    //NOTE: One entry per review, so a customer who reviewed twice appears twice
    pub fn customers(&self, connection: &Connection) -> Result<Vec<Customer>> {
        let mut statement = connection
            .prepare(
                "SELECT customers.id AS id, customers.first_name AS first_name, customers.last_name AS last_name
             FROM customers
             JOIN reviews ON customers.id = reviews.customer_id
             WHERE reviews.restaurant_id = ?1
             ORDER BY reviews.id",
            )
            .context("Failed to prepare restaurant customers query")?;

        let rows = statement
            .query_map(params![self.id], customer_from_row)
            .context("Failed to query restaurant customers")?;

        let mut customers = Vec::new();
        for row in rows {
            customers.push(row.context("Failed to parse customer")?);
        }

        Ok(customers)
    }
}
