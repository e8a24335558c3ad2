//INFO: Demo command - seeds the sample data and prints three results from it
//NOTE: Restaurant 1's reviews, customer 1's restaurants and review 1's summary, one per line

use super::{require_customer, require_restaurant, require_review, CommandOutput};
use crate::database::create_sample_data;
use crate::models::{Restaurant, Review};
use anyhow::{Context, Result};
use rusqlite::Connection;

//INFO: The three results the demo prints
#[derive(Debug)]
pub struct DemoReport {
    pub restaurant_reviews: Vec<Review>,
    pub customer_restaurants: Vec<Restaurant>,
    pub full_review: String,
}

impl DemoReport {
    //INFO: One line per result, lists as compact JSON
    pub fn render(&self) -> Result<String> {
        let reviews = serde_json::to_string(&self.restaurant_reviews)
            .context("Failed to serialize restaurant reviews")?;
        let restaurants = serde_json::to_string(&self.customer_restaurants)
            .context("Failed to serialize customer restaurants")?;

        Ok(format!("{}\n{}\n{}", reviews, restaurants, self.full_review))
    }
}

//INFO: Row id the demo reports on for each table
const DEMO_ID: i64 = 1;

//INFO: Seeds the sample data set, then collects the report for restaurant 1, customer 1 and review 1
pub fn build_report(connection: &mut Connection) -> Result<DemoReport> {
    create_sample_data(connection)?;

    let restaurant = require_restaurant(connection, DEMO_ID)?;
    let customer = require_customer(connection, DEMO_ID)?;
    let review = require_review(connection, DEMO_ID)?;

    Ok(DemoReport {
        restaurant_reviews: restaurant.reviews(connection)?,
        customer_restaurants: customer.restaurants(connection)?,
        full_review: review.full_review(connection)?,
    })
}

pub fn run_demo(connection: &mut Connection) -> Result<CommandOutput> {
    let report = build_report(connection)?;
    Ok(CommandOutput::Text(report.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::queries::{get_customer, get_restaurant};
    use crate::models::test_connection;

    #[test]
    fn test_demo_report_on_fresh_database() {
        let mut connection = test_connection();
        let report = build_report(&mut connection).unwrap();

        assert_eq!(report.restaurant_reviews.len(), 1);
        assert_eq!(report.restaurant_reviews[0].star_rating, 4);
        assert_eq!(report.customer_restaurants.len(), 1);
        assert_eq!(report.customer_restaurants[0].name, "Restaurant A");
        assert_eq!(
            report.full_review,
            "Review for Restaurant A by John Doe: 4 stars."
        );
    }

    #[test]
    fn test_demo_render() {
        let mut connection = test_connection();
        let rendered = build_report(&mut connection).unwrap().render().unwrap();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"[{"id":1,"customer_id":1,"restaurant_id":1,"star_rating":4}]"#,
                r#"[{"id":1,"name":"Restaurant A","price":3}]"#,
                "Review for Restaurant A by John Doe: 4 stars.",
            ]
        );
    }

    #[test]
    fn test_demo_rerun_reports_first_rows() {
        let mut connection = test_connection();
        build_report(&mut connection).unwrap();
        let report = build_report(&mut connection).unwrap();

        let restaurant = get_restaurant(&connection, 1).unwrap().unwrap();
        let customer = get_customer(&connection, 1).unwrap().unwrap();
        assert_eq!(report.restaurant_reviews, restaurant.reviews(&connection).unwrap());
        assert_eq!(report.customer_restaurants, customer.restaurants(&connection).unwrap());

        //INFO: Both seeding runs left a (customer 1, restaurant 1, 4 stars) review
        let ratings: Vec<_> = report
            .restaurant_reviews
            .iter()
            .map(|review| (review.id, review.customer_id, review.star_rating))
            .collect();
        assert_eq!(ratings, vec![(1, 1, 4), (3, 1, 4)]);
        assert!(report
            .customer_restaurants
            .iter()
            .all(|restaurant| restaurant.id == 1 && restaurant.name == "Restaurant A"));
        assert_eq!(
            report.full_review,
            "Review for Restaurant A by John Doe: 4 stars."
        );
    }
}
