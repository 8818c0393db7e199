//! Groundwork — starter bootstrap entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Init logger
//!   3. Build the config snapshot
//!   4. Log resolved settings and hand off to application code

use tracing::info;

use groundwork::config::Config;
use groundwork::{error::AppError, logger};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    logger::init("info")?;

    let config = Config::from_env();

    info!(
        env_mode = %config.env_mode,
        port = config.port,
        database = config.database_url.is_some(),
        cache = config.redis_url.is_some(),
        "config loaded"
    );
    println!(
        "✓ groundwork initialized: env={} port={}",
        config.env_mode, config.port
    );

    Ok(())
}
