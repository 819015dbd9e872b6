//! Planets command handler.

use anyhow::Result;

use crewplanner_cli::output::{render_json, render_planet_table, PlanetRow};
use crewplanner_lib::Catalog;

use crate::OutputFormat;

pub fn handle_list_planets(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let planets = catalog.planets_sorted();
    match format {
        OutputFormat::Json => {
            let rows: Vec<PlanetRow<'_>> = planets.iter().map(|p| PlanetRow::from(*p)).collect();
            render_json(&rows)?;
        }
        OutputFormat::Text => print!("{}", render_planet_table(&planets)),
    }
    Ok(())
}
