//! Tabletop move picker binary.
//!
//! Composition root: loads configuration from the environment (and `.env`),
//! installs logging, bootstraps the session and description source, then
//! hands control to the terminal frontend.
//!
//! ```bash
//! CONTENT_DATA_DIR=./data CANDIDATE_MOVES=draw,advance cargo run -p tabletop-client
//! ```

use anyhow::Result;
use client_bootstrap::{BootstrapConfig, SetupBuilder};
use client_frontend_core::{FrontendConfig, FrontendContext, MoveDescriptionResolver};
use tabletop_client::{Frontend, TerminalFrontend, logging};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // 1. Load configuration from environment
    let bootstrap_config = BootstrapConfig::from_env();
    let frontend_config = FrontendConfig::from_env();

    // 2. Setup logging
    let label = bootstrap_config
        .log_label
        .clone()
        .unwrap_or_else(logging::launch_label);
    let _guard = logging::setup_logging(&label)?;

    tracing::info!("Starting tabletop client");
    tracing::info!(
        data_dir = ?bootstrap_config.data_dir,
        overrides = bootstrap_config.overrides.len(),
        "bootstrap configuration loaded"
    );

    // 3. Bootstrap session, description source and candidates
    let setup = SetupBuilder::new(bootstrap_config).build()?;
    println!("{}", serde_json::to_string_pretty(&setup.session)?);

    // 4. Run the frontend
    let context = FrontendContext {
        resolver: MoveDescriptionResolver::with_source(setup.source),
        candidates: setup.candidates,
        session_label: setup.session.id().to_string(),
    };
    TerminalFrontend::stdio(frontend_config).run(context)?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
