//INFO: Tracing setup for the restaurant-reviews binary
//NOTE: Logs go to stderr so command output on stdout stays machine readable
//NOTE: RUST_LOG overrides the default level, e.g. RUST_LOG=restaurant_reviews_lib=debug

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

//INFO: Installs a console subscriber at `warn`, or `debug` with --debug
pub fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
