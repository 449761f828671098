//! Arena binary.
//!
//! Loads `.env`, installs logging, reads [`ArenaConfig`] from the environment
//! and runs the narrated demo on stdout.
//!
//! # Examples
//!
//! ```bash
//! ARENA_CHALLENGER=rogue ARENA_OPPONENT=archer cargo run -p combat-arena
//! RUST_LOG=debug cargo run -p combat-arena
//! ```

use anyhow::Result;
use combat_arena::{ArenaConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    logging::setup_logging()?;

    let config = ArenaConfig::from_env();
    tracing::info!("Starting arena with data from {}", config.data_dir.display());

    let stdout = std::io::stdout();
    combat_arena::run(&mut stdout.lock(), &config)
}
