use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use anyhow::{Context, Result};
use roomsift_runtime::config::resolve_config_path;
use roomsift_runtime::Config;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    debug!(path = %config_path.display(), "resolved config path");

    match cli.command {
        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                let config = load_config(&config_path)?;
                handlers::config::show(&config)
            }
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
        },

        Commands::Rooms(args) => {
            let config = load_config(&config_path)?;
            handlers::rooms::handle(args, &config, cli.format)
        }

        Commands::Reservations(args) => {
            let config = load_config(&config_path)?;
            handlers::reservations::handle(args, &config, cli.format)
        }
    }
}

fn load_config(path: &std::path::Path) -> Result<Config> {
    Config::load_from(path)
        .with_context(|| format!("failed to load config from {}", path.display()))
}
