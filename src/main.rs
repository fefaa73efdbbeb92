// src/main.rs — CodeScribe entry point

use clap::Parser;

use codescribe::api::{self, ApiState};
use codescribe::cli::Cli;
use codescribe::infra::config::Config;
use codescribe::infra::logger;
use codescribe::provider;

#[tokio::main]
async fn main() {
    // Secrets usually live in a .env next to the binary; a missing file is fine.
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logger::init_logging(&cli.log_level);

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load config (falls back to defaults if no config.toml)
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    config.apply_env()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    tracing::info!(
        name = %config.app.name,
        version = %config.app.version,
        environment = config.app.environment.as_deref().unwrap_or("unset"),
        "starting"
    );

    let provider = provider::from_config(&config.model)?;
    let state = ApiState::new(provider, &config);
    api::start_server(&config.server, state).await
}
