//! Evaluate command handler.

use anyhow::{Context, Result};
use tracing::info;

use crewplanner_lib::{evaluate, Catalog, Constraints, Starship};

use crate::OutputFormat;
use crewplanner_cli::output::{render_evaluation, render_json};
use crewplanner_cli::terminal::ColorPalette;

/// Arguments for a single feasibility check.
#[derive(Debug, Clone)]
pub struct EvaluateArgs {
    pub planet: String,
    pub ships: Vec<String>,
    pub constraints: Constraints,
}

/// Resolve the mission records and print the feasibility result.
///
/// Unknown planets or starships are errors. An infeasible mission is not;
/// it is reported through the result's reasons.
pub fn handle_evaluate(catalog: &Catalog, args: &EvaluateArgs, format: OutputFormat) -> Result<()> {
    let destination = catalog
        .find_planet(&args.planet)
        .context("failed to resolve target planet")?;
    let fleet = args
        .ships
        .iter()
        .map(|query| catalog.find_starship(query).cloned())
        .collect::<crewplanner_lib::Result<Vec<Starship>>>()
        .context("failed to resolve fleet")?;

    let result = evaluate(destination, &fleet, &args.constraints);
    info!(
        planet = %destination.name,
        ships = fleet.len(),
        ok = result.ok,
        "mission evaluated"
    );

    match format {
        OutputFormat::Json => render_json(&result)?,
        OutputFormat::Text => print!(
            "{}",
            render_evaluation(destination, &fleet, &result, ColorPalette::detect())
        ),
    }
    Ok(())
}
