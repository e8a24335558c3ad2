//INFO: Review commands - show, add and delete

use super::{require_customer, require_restaurant, require_review, CommandOutput};
use crate::cli::ReviewCommand;
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;
use tracing::info;

//INFO: Response for a delete, echoing the pair and how many reviews went away
#[derive(Debug, Serialize)]
pub struct DeleteReviewsResponse {
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub removed: usize,
}

pub fn execute(connection: &Connection, action: ReviewCommand) -> Result<CommandOutput> {
    match action {
        ReviewCommand::Show { id } => {
            let review = require_review(connection, id)?;
            Ok(CommandOutput::Text(review.full_review(connection)?))
        }
        ReviewCommand::Add {
            customer,
            restaurant,
            rating,
        } => {
            let customer = require_customer(connection, customer)?;
            let restaurant = require_restaurant(connection, restaurant)?;

            let review = customer.add_review(connection, &restaurant, rating)?;
            info!(review_id = review.id, "review added");

            CommandOutput::json(&review)
        }
        ReviewCommand::Delete {
            customer,
            restaurant,
        } => {
            let customer = require_customer(connection, customer)?;
            let restaurant = require_restaurant(connection, restaurant)?;

            let removed = customer.delete_reviews(connection, &restaurant)?;

            CommandOutput::json(&DeleteReviewsResponse {
                customer_id: customer.id,
                restaurant_id: restaurant.id,
                removed,
            })
        }
    }
}
