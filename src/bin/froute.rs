//! CLI entry point for the `froute` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use fuel_route::cli::commands;
use fuel_route::{ParserConfig, RouteError};

#[derive(Parser)]
#[command(
    name = "froute",
    about = "Minimum fuel-consumption routes over named stops"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// TOML file overriding the parser settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cheapest connection of the minimum spanning forest
    Route {
        /// Path to the route file
        file: PathBuf,
        /// Print the input lines before the report
        #[arg(long)]
        echo: bool,
    },
    /// Print every connection of the minimum spanning forest
    Mst {
        /// Path to the route file
        file: PathBuf,
    },
    /// Show which row layout the file was classified as
    Detect {
        /// Path to the route file
        file: PathBuf,
    },
    /// Stop, edge and component counts
    Stats {
        /// Path to the route file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match ParserConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(3);
        }
    };

    let result = match cli.command {
        Commands::Route { file, echo } => commands::cmd_route(&file, &config, echo, json),
        Commands::Mst { file } => commands::cmd_mst(&file, &config, json),
        Commands::Detect { file } => commands::cmd_detect(&file, &config, json),
        Commands::Stats { file } => commands::cmd_stats(&file, &config, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            RouteError::Io(_) => 1,
            RouteError::ResourceNotFound(_)
            | RouteError::MalformedHeader { .. }
            | RouteError::MalformedRow { .. }
            | RouteError::InvalidCost(_) => 2,
            RouteError::Config(_) => 3,
            RouteError::UnknownId(_) => 4,
        };
        process::exit(code);
    }
}
