//INFO: Sample data for restaurant reviews
//NOTE: Two restaurants, two customers and one review each, committed as a single transaction
//NOTE: The reviews always point at customer/restaurant 1 and 2, whatever ids this run's rows receive

use crate::database::queries::{insert_customer, insert_restaurant, insert_review};
use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;
use tracing::info;

//INFO: Ids assigned to the sample rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub restaurant_ids: Vec<i64>,
    pub customer_ids: Vec<i64>,
    pub review_ids: Vec<i64>,
}

//INFO: Inserts the sample restaurants, customers and reviews
//NOTE: Rolls back every insert if any one of them fails
pub fn create_sample_data(connection: &mut Connection) -> Result<SeedSummary> {
    let transaction = connection
        .transaction()
        .context("Failed to begin sample data transaction")?;

    let restaurant_a = insert_restaurant(&transaction, "Restaurant A", 3)?;
    let restaurant_b = insert_restaurant(&transaction, "Restaurant B", 2)?;

    let john = insert_customer(&transaction, "John", "Doe")?;
    let jane = insert_customer(&transaction, "Jane", "Smith")?;

    let first_review = insert_review(&transaction, 1, 1, 4)?;
    let second_review = insert_review(&transaction, 2, 2, 5)?;

    transaction
        .commit()
        .context("Failed to commit sample data")?;

    info!("sample data created");

    Ok(SeedSummary {
        restaurant_ids: vec![restaurant_a.id, restaurant_b.id],
        customer_ids: vec![john.id, jane.id],
        review_ids: vec![first_review.id, second_review.id],
    })
}
