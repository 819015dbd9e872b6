mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crewplanner_cli::output::print_logo;
use crewplanner_cli::terminal::ColorPalette;
use crewplanner_lib::Constraints;

use commands::data::load_catalog;
use commands::evaluate::{handle_evaluate, EvaluateArgs};
use commands::planets::handle_list_planets;
use commands::ships::handle_list_ships;

#[derive(Parser, Debug)]
#[command(author, version, about = "Crew planner mission feasibility tools")]
struct Cli {
    /// Path to the catalog JSON file (falls back to CREWPLANNER_DATA).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress the logo banner.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a fleet can carry out a mission to a planet.
    Evaluate {
        /// Target planet id or name.
        #[arg(long)]
        planet: String,
        /// Starship id or name; repeat for each fleet member.
        #[arg(long = "ship", required = true)]
        ships: Vec<String>,
        /// Maximum combined cost in credits.
        #[arg(long, value_parser = parse_non_negative)]
        budget: Option<f64>,
        /// Minimum combined passenger capacity.
        #[arg(long, value_parser = parse_non_negative)]
        min_passengers: Option<f64>,
        /// Minimum combined cargo capacity in kilograms.
        #[arg(long, value_parser = parse_non_negative)]
        cargo: Option<f64>,
        /// Maximum number of intermediate stops.
        #[arg(long)]
        max_stops: Option<u32>,
    },
    /// List planets in the catalog.
    Planets,
    /// List starships in the catalog.
    Ships,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if !cli.no_logo && cli.format == OutputFormat::Text {
        print_logo(ColorPalette::detect());
    }

    let catalog = load_catalog(cli.data.as_deref())?;

    match cli.command {
        Command::Evaluate {
            planet,
            ships,
            budget,
            min_passengers,
            cargo,
            max_stops,
        } => {
            let args = EvaluateArgs {
                planet,
                ships,
                constraints: Constraints {
                    budget,
                    min_passengers,
                    cargo_kg: cargo,
                    max_stops,
                },
            };
            handle_evaluate(&catalog, &args, cli.format)
        }
        Command::Planets => handle_list_planets(&catalog, cli.format),
        Command::Ships => handle_list_ships(&catalog, cli.format),
    }
}

fn parse_non_negative(raw: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{raw}' must be a finite, non-negative number"));
    }
    Ok(value)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
