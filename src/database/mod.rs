//INFO: Database module - handles all SQLite operations for restaurant reviews
//NOTE: Single file database, opened once and passed explicitly to every accessor

pub mod connection;
pub mod queries;
pub mod schema;
pub mod seed;

pub use connection::{Database, IN_MEMORY_PATH};
pub use schema::initialize_database;
pub use seed::{create_sample_data, SeedSummary};
