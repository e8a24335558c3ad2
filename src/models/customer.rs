//INFO: Customer entity, its accessors and the review lifecycle
//NOTE: Mutations run outside any transaction, so each one commits on its own

use crate::database::queries::{insert_review, restaurant_from_row, review_from_row};
use crate::models::{Restaurant, Review};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use tracing::debug;

//INFO: Customer data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    //INFO: First and last name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    //INFO: Gets every review this customer has left
    pub fn reviews(&self, connection: &Connection) -> Result<Vec<Review>> {
        let mut statement = connection
            .prepare(
                "SELECT id, customer_id, restaurant_id, star_rating
             FROM reviews
             WHERE customer_id = ?1
             ORDER BY id",
            )
            .context("Failed to prepare customer reviews query")?;

        let rows = statement
            .query_map(params![self.id], review_from_row)
            .context("Failed to query customer reviews")?;

        let mut reviews = Vec::new();
        for row in rows {
            reviews.push(row.context("Failed to parse review")?);
        }

        Ok(reviews)
    }

    //INFO: Gets the restaurants this customer has reviewed
    //NOTE: One entry per review, so a restaurant reviewed twice appears twice
    pub fn restaurants(&self, connection: &Connection) -> Result<Vec<Restaurant>> {
        let mut statement = connection
            .prepare(
                "SELECT restaurants.id AS id, restaurants.name AS name, restaurants.price AS price
             FROM restaurants
             JOIN reviews ON restaurants.id = reviews.restaurant_id
             WHERE reviews.customer_id = ?1
             ORDER BY reviews.id",
            )
            .context("Failed to prepare customer restaurants query")?;

        let rows = statement
            .query_map(params![self.id], restaurant_from_row)
            .context("Failed to query customer restaurants")?;

        let mut restaurants = Vec::new();
        for row in rows {
            restaurants.push(row.context("Failed to parse restaurant")?);
        }

        Ok(restaurants)
    }

    //INFO: Gets the restaurant this customer rated highest
    //NOTE: An aggregate over zero rows still yields one all-NULL row, read here as None.
    //NOTE: On a tie SQLite takes the bare columns from the first scanned row that reached the max.
    pub fn favorite_restaurant(&self, connection: &Connection) -> Result<Option<Restaurant>> {
        let favorite = connection
            .query_row(
                "SELECT restaurants.id AS id, restaurants.name AS name, restaurants.price AS price,
                    MAX(reviews.star_rating) AS max_rating
             FROM restaurants
             JOIN reviews ON restaurants.id = reviews.restaurant_id
             WHERE reviews.customer_id = ?1",
                params![self.id],
                |row| {
                    let id: Option<i64> = row.get("id")?;
                    match id {
                        Some(_) => restaurant_from_row(row).map(Some),
                        None => Ok(None),
                    }
                },
            )
            .optional()
            .context("Failed to query favorite restaurant")?;

        Ok(favorite.flatten())
    }

    //INFO: Leaves a new review for the restaurant
    //NOTE: The rating is not range-checked
    pub fn add_review(
        &self,
        connection: &Connection,
        restaurant: &Restaurant,
        rating: i64,
    ) -> Result<Review> {
        insert_review(connection, self.id, restaurant.id, rating)
    }

    //INFO: Removes all of this customer's reviews for the restaurant
    //NOTE: Returns the number of reviews removed; zero is not an error
    pub fn delete_reviews(&self, connection: &Connection, restaurant: &Restaurant) -> Result<usize> {
        let removed = connection
            .execute(
                "DELETE FROM reviews WHERE customer_id = ?1 AND restaurant_id = ?2",
                params![self.id, restaurant.id],
            )
            .context("Failed to delete reviews")?;

        debug!(
            customer_id = self.id,
            restaurant_id = restaurant.id,
            removed,
            "reviews deleted"
        );

        Ok(removed)
    }
}
