//INFO: Runtime configuration for restaurant reviews
//NOTE: The database path comes from --database / RESTAURANT_REVIEWS_DB, else the platform data directory

use std::path::PathBuf;

//INFO: Environment variable read by the --database flag
pub const DATABASE_ENV_VAR: &str = "RESTAURANT_REVIEWS_DB";

//INFO: File name of the database inside the data directory
const DATABASE_FILE_NAME: &str = "restaurant_reviews.db";

//INFO: Resolved settings for one run of the program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub debug: bool,
}

impl Config {
    //INFO: Picks the explicit path if given, otherwise the default location
    pub fn resolve(database: Option<PathBuf>, debug: bool) -> Self {
        Self {
            database_path: database.unwrap_or_else(default_database_path),
            debug,
        }
    }
}

//INFO: Gets the default database path
//NOTE: Linux: ~/.local/share/restaurant-reviews, macOS: ~/Library/Application Support/restaurant-reviews, Windows: %APPDATA%\restaurant-reviews
pub fn default_database_path() -> PathBuf {
    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("restaurant-reviews").join(DATABASE_FILE_NAME),
        None => PathBuf::from(DATABASE_FILE_NAME),
    }
}
