//INFO: Domain entities and their accessors
//NOTE: Every accessor takes the connection explicitly and runs a single query

pub mod customer;
pub mod restaurant;
pub mod review;

pub use customer::Customer;
pub use restaurant::Restaurant;
pub use review::{Review, REVIEW_NOT_FOUND};

//INFO: In-memory connection with foreign keys on and the schema created
#[cfg(test)]
pub(crate) fn test_connection() -> rusqlite::Connection {
    let connection = rusqlite::Connection::open_in_memory().unwrap();
    connection.execute("PRAGMA foreign_keys = ON", []).unwrap();
    crate::database::initialize_database(&connection).unwrap();
    connection
}
