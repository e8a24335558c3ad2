//INFO: Review entity and lookups of the customer and restaurant it points at

use crate::database::queries::{get_customer, get_restaurant};
use crate::models::{Customer, Restaurant};
use anyhow::Result;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

//INFO: Text returned by full_review when either side of the review is missing
pub const REVIEW_NOT_FOUND: &str = "Review not found.";

//INFO: Review data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub star_rating: i64,
}

impl Review {
    //INFO: Gets the customer who wrote this review
    //NOTE: Returns None if the customer row doesn't exist
    pub fn customer(&self, connection: &Connection) -> Result<Option<Customer>> {
        get_customer(connection, self.customer_id)
    }

    //INFO: Gets the restaurant this review is for
    //NOTE: Returns None if the restaurant row doesn't exist
    pub fn restaurant(&self, connection: &Connection) -> Result<Option<Restaurant>> {
        get_restaurant(connection, self.restaurant_id)
    }

    //INFO: One-line summary, e.g. "Review for Restaurant A by John Doe: 4 stars."
    pub fn full_review(&self, connection: &Connection) -> Result<String> {
        let customer = self.customer(connection)?;
        let restaurant = self.restaurant(connection)?;

        match (customer, restaurant) {
            (Some(customer), Some(restaurant)) => Ok(format!(
                "Review for {} by {}: {} stars.",
                restaurant.name,
                customer.full_name(),
                self.star_rating
            )),
            _ => Ok(REVIEW_NOT_FOUND.to_string()),
        }
    }
}
