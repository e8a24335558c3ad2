//! End-to-end scenario against a file-backed database

use restaurant_reviews_lib::database::queries::{get_customer, get_restaurant, get_review};
use restaurant_reviews_lib::database::{create_sample_data, initialize_database, Database};
use restaurant_reviews_lib::models::Review;
use tempfile::TempDir;

fn open_seeded(dir: &TempDir) -> Database {
    let database = Database::new(dir.path().join("nested").join("reviews.db")).unwrap();
    {
        let mut connection = database.connection.lock();
        initialize_database(&connection).unwrap();
        create_sample_data(&mut connection).unwrap();
    }
    database
}

#[test]
fn test_sample_scenario() {
    let dir = TempDir::new().unwrap();
    let database = open_seeded(&dir);
    let connection = database.connection.lock();

    let restaurant = get_restaurant(&connection, 1).unwrap().unwrap();
    let reviews = restaurant.reviews(&connection).unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].star_rating, 4);

    let customer = get_customer(&connection, 1).unwrap().unwrap();
    let restaurants = customer.restaurants(&connection).unwrap();
    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0].name, "Restaurant A");

    let review = get_review(&connection, 1).unwrap().unwrap();
    assert_eq!(
        review.full_review(&connection).unwrap(),
        "Review for Restaurant A by John Doe: 4 stars."
    );
}

#[test]
fn test_unsaved_review_values_resolve_like_stored_ones() {
    let dir = TempDir::new().unwrap();
    let database = open_seeded(&dir);
    let connection = database.connection.lock();

    let review = Review {
        id: 1,
        customer_id: 1,
        restaurant_id: 1,
        star_rating: 4,
    };
    assert_eq!(
        review.full_review(&connection).unwrap(),
        "Review for Restaurant A by John Doe: 4 stars."
    );
}

#[test]
fn test_review_lifecycle_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("reviews.db");

    {
        let database = open_seeded(&dir);
        let connection = database.connection.lock();
        let jane = get_customer(&connection, 2).unwrap().unwrap();
        let restaurant_a = get_restaurant(&connection, 1).unwrap().unwrap();

        jane.add_review(&connection, &restaurant_a, 1).unwrap();
        jane.add_review(&connection, &restaurant_a, 5).unwrap();
    }

    let database = Database::new(&path).unwrap();
    let connection = database.connection.lock();
    initialize_database(&connection).unwrap();

    let jane = get_customer(&connection, 2).unwrap().unwrap();
    let restaurant_a = get_restaurant(&connection, 1).unwrap().unwrap();
    assert_eq!(jane.reviews(&connection).unwrap().len(), 3);
    assert_eq!(restaurant_a.customers(&connection).unwrap().len(), 3);

    assert_eq!(jane.delete_reviews(&connection, &restaurant_a).unwrap(), 2);
    let remaining = restaurant_a.reviews(&connection).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].customer_id, 1);

    let favorite = jane.favorite_restaurant(&connection).unwrap().unwrap();
    assert_eq!(favorite.name, "Restaurant B");
}
