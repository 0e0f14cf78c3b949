//! `langtag`: inspect, match and truncate BCP 47 language tags from the
//! command line.

mod cli;
mod output;

use clap::Parser;

use langtag_cli::config::CliConfig;
use langtag_cli::error::CliError;
use langtag_cli::logging::init_logging;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting langtag");

    if let Err(e) = cli::run(cli.command, &config) {
        tracing::error!(error = ?e, "command failed");
        std::process::exit(1);
    }
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(cli.log_level, cli.json.then_some(true)))
}
