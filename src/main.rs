use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use pathfinder::{
    Catalog, LocationQuery, PathfinderConfig, PathfinderError, Place, TravelMode, build_url, logging,
    web,
};

/// Juneau Pathfinder
#[derive(Parser)]
#[command(name = "pathfinder")]
#[command(author, version, about = "Directions to Juneau trailheads and destinations", long_about = None)]
struct Cli {
    /// Configuration file (defaults to <config dir>/pathfinder/config.toml)
    #[arg(short, long, global = true, env = "PATHFINDER_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the directions link for a free-form location query
    Link {
        /// Coordinates, location code or address
        query: String,

        #[arg(short, long, value_enum, default_value_t = ModeArg::Walking)]
        mode: ModeArg,
    },

    /// Show how a location query is classified
    Classify {
        query: String,
    },

    /// List the places in the catalog
    List {
        #[arg(value_enum)]
        list: ListArg,
    },

    /// Print the directions link for a named catalog entry
    Directions {
        #[arg(value_enum)]
        list: ListArg,

        /// Exact place name
        name: String,

        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Run the HTTP server
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Walking,
    Driving,
    Transit,
}

impl From<ModeArg> for TravelMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Walking => TravelMode::Walking,
            ModeArg::Driving => TravelMode::Driving,
            ModeArg::Transit => TravelMode::Transit,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ListArg {
    Destinations,
    Trailheads,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PathfinderConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Link { query, mode } => {
            println!("{}", build_url(&query, mode.into()));
        }
        Commands::Classify { query } => {
            print_classification(&query);
        }
        Commands::List { list } => {
            let catalog = config.load_catalog()?;
            print_list(&catalog, list);
        }
        Commands::Directions { list, name, mode } => {
            let catalog = config.load_catalog()?;
            let url = match list {
                ListArg::Destinations => {
                    let destination = catalog
                        .find_destination(&name)
                        .ok_or_else(|| PathfinderError::not_found(format!("destination '{name}'")))?;
                    destination.directions(mode.map_or(config.defaults.pathfinder_mode, TravelMode::from))
                }
                ListArg::Trailheads => {
                    let trailhead = catalog
                        .find_trailhead(&name)
                        .ok_or_else(|| PathfinderError::not_found(format!("trailhead '{name}'")))?;
                    trailhead.directions(mode.map_or(config.defaults.trailhead_mode, TravelMode::from))
                }
            };
            println!("{url}");
        }
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
                config.validate()?;
            }
            let catalog = config.load_catalog()?;
            web::run(&config, catalog).await?;
        }
    }

    Ok(())
}

fn print_classification(query: &str) {
    match LocationQuery::classify(query) {
        LocationQuery::Coordinates {
            latitude,
            longitude,
        } => println!("coordinates: latitude {latitude}, longitude {longitude}"),
        LocationQuery::LocationCode(code) => println!("location_code: {code}"),
        LocationQuery::FreeText(text) => println!("free_text: {text}"),
    }
}

fn print_list(catalog: &Catalog, list: ListArg) {
    match list {
        ListArg::Destinations => {
            for dest in catalog.destinations() {
                println!("{} | {}", dest.name, dest.query);
            }
        }
        ListArg::Trailheads => {
            for trailhead in catalog.trailheads() {
                let milemarker = trailhead.milemarker.as_deref().unwrap_or("-");
                println!("{} | {} | {}", trailhead.name, milemarker, trailhead.query);
            }
        }
    }
}
