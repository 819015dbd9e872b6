//! Ships command handler.

use anyhow::Result;

use crewplanner_cli::output::{render_json, render_ship_table, ShipRow};
use crewplanner_lib::Catalog;

use crate::OutputFormat;

/// List starships with their capacity fields normalized.
pub fn handle_list_ships(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let rows: Vec<ShipRow> = catalog
        .starships_sorted()
        .into_iter()
        .map(ShipRow::from)
        .collect();
    match format {
        OutputFormat::Json => render_json(&rows)?,
        OutputFormat::Text => print!("{}", render_ship_table(&rows)),
    }
    Ok(())
}
