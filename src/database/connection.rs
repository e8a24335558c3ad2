//INFO: Database connection management for restaurant reviews
//NOTE: Uses SQLite with a single file, or an in-memory database for `:memory:`

use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

//INFO: Path that selects an in-memory database instead of a file
pub const IN_MEMORY_PATH: &str = ":memory:";

//INFO: Owner of the one connection used for the process lifetime
//NOTE: Callers lock it once per command and pass `&Connection` into the accessors
pub struct Database {
    pub connection: Mutex<Connection>,
    pub database_path: PathBuf,
}

impl Database {
    //INFO: Opens (or creates) the database at the given path
    //NOTE: Creates parent directories for file-backed databases
    pub fn new(database_path: impl AsRef<Path>) -> Result<Self> {
        let database_path = database_path.as_ref().to_path_buf();

        if database_path.as_os_str() == IN_MEMORY_PATH {
            return Self::open_in_memory();
        }

        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }

        let connection = Connection::open(&database_path)
            .with_context(|| format!("Failed to open database at {}", database_path.display()))?;
        configure(&connection)?;

        info!(path = %database_path.display(), "database opened");

        Ok(Self {
            connection: Mutex::new(connection),
            database_path,
        })
    }

    //INFO: Opens a private in-memory database
    //NOTE: Contents vanish when the Database is dropped
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().context("Failed to open in-memory database")?;
        configure(&connection)?;

        info!("in-memory database opened");

        Ok(Self {
            connection: Mutex::new(connection),
            database_path: PathBuf::from(IN_MEMORY_PATH),
        })
    }

    //INFO: Returns the path the database was opened from
    pub fn get_database_path(&self) -> &PathBuf {
        &self.database_path
    }
}

//INFO: Enables foreign key support for referential integrity
fn configure(connection: &Connection) -> Result<()> {
    connection
        .execute("PRAGMA foreign_keys = ON", [])
        .context("Failed to enable foreign keys")?;
    Ok(())
}
