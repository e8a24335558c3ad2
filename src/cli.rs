//INFO: Command line definition for restaurant-reviews

use crate::config::DATABASE_ENV_VAR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "restaurant-reviews",
    version,
    about = "Restaurants, customers and their star-rated reviews"
)]
pub struct Cli {
    /// Path to the SQLite database (`:memory:` for a throwaway database)
    #[arg(long, global = true, env = DATABASE_ENV_VAR)]
    pub database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Seed the sample data, then print restaurant 1's reviews, customer 1's restaurants and review 1
    Demo,
    /// Insert the sample restaurants, customers and reviews
    Seed,
    /// List all restaurants
    Restaurants,
    /// List all customers
    Customers,
    /// Queries about one restaurant
    Restaurant {
        #[command(subcommand)]
        action: RestaurantCommand,
    },
    /// Queries and review changes for one customer
    Customer {
        #[command(subcommand)]
        action: CustomerCommand,
    },
    /// Show, add or delete reviews
    Review {
        #[command(subcommand)]
        action: ReviewCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum RestaurantCommand {
    /// Reviews left for the restaurant
    Reviews {
        /// Restaurant id
        id: i64,
    },
    /// Customers who reviewed the restaurant, one per review
    Customers {
        /// Restaurant id
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Reviews written by the customer
    Reviews {
        /// Customer id
        id: i64,
    },
    /// Restaurants the customer reviewed, one per review
    Restaurants {
        /// Customer id
        id: i64,
    },
    /// The restaurant the customer rated highest
    Favorite {
        /// Customer id
        id: i64,
    },
    /// The customer's full name
    Name {
        /// Customer id
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// Print the one-line summary of a review
    Show {
        /// Review id
        id: i64,
    },
    /// Add a review for a restaurant
    Add {
        /// Customer id
        #[arg(long)]
        customer: i64,
        /// Restaurant id
        #[arg(long)]
        restaurant: i64,
        /// Star rating (not range-checked)
        #[arg(long, allow_negative_numbers = true)]
        rating: i64,
    },
    /// Delete every review a customer left for a restaurant
    Delete {
        /// Customer id
        #[arg(long)]
        customer: i64,
        /// Restaurant id
        #[arg(long)]
        restaurant: i64,
    },
}
