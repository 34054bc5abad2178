//! `sporthub` command-line entry point.

use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::debug;

use sporthub_client::config::ClientSettings;
use sporthub_client::domain::Rehydration;
use sporthub_client::inbound::cli::{self, Cli, CliState};
use sporthub_client::outbound::storage::FileTokenStore;
use sporthub_client::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    let settings = ClientSettings::load()?;
    telemetry::init(settings.json_logs);

    let api_base = match args.api_url {
        Some(url) => url,
        None => settings.api_base_url()?,
    };
    let state_dir = settings.state_dir();
    let store = FileTokenStore::open(&state_dir)
        .wrap_err_with(|| format!("opening state directory {}", state_dir.display()))?;
    let state = CliState::new(api_base, Arc::new(store), settings.checkout_base_url()?)
        .wrap_err("building HTTP client")?;

    match state.auth.rehydrate().await {
        Rehydration::Restored(session) => {
            debug!(admin = session.is_admin(), "restored previous session");
        }
        Rehydration::LoggedOut => debug!("starting signed out"),
    }

    let mut stdout = io::stdout().lock();
    cli::run(&state, args.command, &mut stdout).await?;
    stdout.flush()?;
    Ok(())
}
