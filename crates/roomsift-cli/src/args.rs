use crate::types::{LogLevel, OutputFormat};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roomsift")]
#[command(about = "Filter, search and sort hotel listings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Config file (default: $ROOMSIFT_CONFIG or XDG config dir)")]
    pub config: Option<String>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter the room catalogue
    Rooms(RoomsArgs),

    /// Filter and sort reservations
    Reservations(ReservationsArgs),

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Clone, Args)]
pub struct RoomsArgs {
    /// JSON array of room records
    pub file: PathBuf,

    #[arg(long, help = "Room type fragment (e.g. doble, suite)")]
    pub tipo: Option<String>,

    #[arg(long, help = "Minimum price per night")]
    pub precio_min: Option<String>,

    #[arg(long, help = "Maximum price per night")]
    pub precio_max: Option<String>,

    #[arg(long, help = "Minimum guest capacity")]
    pub capacidad: Option<String>,

    #[arg(long, help = "Quick search over title, description and type")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ReservationsArgs {
    /// JSON array of reservation records
    pub file: PathBuf,

    #[arg(long, help = "Status to show (all, confirmada, pendiente, activa, cancelada)")]
    pub status: Option<String>,

    #[arg(long, help = "Check-in window (all, upcoming, current, past, this-year)")]
    pub date: Option<String>,

    #[arg(
        long,
        help = "Ordering (date-desc, date-asc, amount-desc, amount-asc, status)"
    )]
    pub sort: Option<String>,

    #[arg(long, help = "Free-text search over the reservation card")]
    pub search: Option<String>,

    #[arg(long, help = "Treat this day as today (YYYY-MM-DD)")]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
