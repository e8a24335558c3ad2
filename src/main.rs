use clap::Parser;
use restaurant_reviews_lib::cli::Cli;

fn main() -> anyhow::Result<()> {
    restaurant_reviews_lib::run(Cli::parse())
}
