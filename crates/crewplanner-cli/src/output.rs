//! Output formatting for feasibility results and catalog listings.
//!
//! Renderers build `String`s from a [`ColorPalette`] so they stay testable;
//! `main` decides where the text goes.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde::Serialize;

use crewplanner_lib::format::format_quantity;
use crewplanner_lib::numeric::normalize_numeric;
use crewplanner_lib::{FeasibilityResult, Planet, PlanetId, Starship, StarshipId};

use crate::terminal::{supports_unicode, ColorPalette};

/// Print the CLI logo banner.
///
/// Uses box-drawing characters when the locale advertises UTF-8 and falls
/// back to ASCII otherwise.
pub fn print_logo(palette: ColorPalette) {
    let ColorPalette {
        cyan,
        orange,
        reset,
        ..
    } = palette;

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────────╮{reset}
{cyan}│{orange}   C R E W   P L A N N E R            {cyan}│{reset}
{cyan}├──────────────────────────────────────┤{reset}
{cyan}│{orange}   mission feasibility console        {cyan}│{reset}
{cyan}╰──────────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+--------------------------------------+
|  CREW PLANNER                        |
|  >> MISSION FEASIBILITY CONSOLE      |
+--------------------------------------+{reset}"
        );
    }
}

/// Write any serializable value to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Render an evaluation as a human-readable report.
pub fn render_evaluation(
    destination: &Planet,
    fleet: &[Starship],
    result: &FeasibilityResult,
    palette: ColorPalette,
) -> String {
    let p = palette;
    let mut out = String::new();

    let (badge, verdict) = if result.ok {
        (p.tag_ok, " FEASIBLE ")
    } else {
        (p.tag_fail, " NOT FEASIBLE ")
    };
    let _ = writeln!(
        out,
        "Mission to {}{}{} {badge}{verdict}{}",
        p.white_bold, destination.name, p.reset, p.reset
    );

    let names: Vec<&str> = fleet.iter().map(|ship| ship.name.as_str()).collect();
    let _ = writeln!(out, "Fleet ({}): {}", fleet.len(), names.join(", "));

    if !result.reasons.is_empty() {
        let _ = writeln!(out, "\nReasons:");
        for reason in &result.reasons {
            let _ = writeln!(out, "  {}- {reason}{}", p.red, p.reset);
        }
    }

    let totals = &result.totals;
    let _ = writeln!(out, "\nTotals:");
    let _ = writeln!(
        out,
        "  Cost:       {} credits",
        format_quantity(totals.cost)
    );
    let _ = writeln!(
        out,
        "  Passengers: {}",
        format_quantity(totals.passengers)
    );
    let _ = writeln!(out, "  Cargo:      {} kg", format_quantity(totals.cargo));

    let _ = writeln!(out, "\nJourney:");
    let _ = writeln!(out, "  Hops:    {}{}{}", p.cyan, result.hops, p.reset);
    let _ = writeln!(out, "  Refuels: {}{}{}", p.cyan, result.refuels, p.reset);

    let _ = writeln!(out, "\nSuggested route:");
    let last = result.suggested_route.len().saturating_sub(1);
    for (i, stop) in result.suggested_route.iter().enumerate() {
        let color = if i == last { p.white_bold } else { p.yellow };
        let _ = writeln!(
            out,
            "  {}. {color}{}{} {}(#{}){}",
            i + 1,
            stop.name,
            p.reset,
            p.gray,
            stop.planet_id,
            p.reset
        );
    }

    out
}

/// Render planets as an aligned table.
pub fn render_planet_table(planets: &[&Planet]) -> String {
    if planets.is_empty() {
        return "No planets available in catalog.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Available planets ({}):", planets.len());
    let _ = writeln!(
        out,
        "{:>5}  {:<18} {:<32} {:<20}",
        "Id", "Name", "Terrain", "Climate"
    );
    for planet in planets {
        let _ = writeln!(
            out,
            "{:>5}  {:<18} {:<32} {:<20}",
            planet.id,
            planet.name,
            planet.terrain.as_deref().unwrap_or("-"),
            planet.climate.as_deref().unwrap_or("-")
        );
    }
    out
}

/// A starship with its capacity fields already normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipRow {
    pub id: StarshipId,
    pub name: String,
    pub cost_in_credits: Option<f64>,
    pub passengers: Option<f64>,
    pub cargo_capacity: Option<f64>,
    pub hyperdrive_rating: Option<f64>,
    #[serde(rename = "MGLT")]
    pub mglt: Option<f64>,
}

impl From<&Starship> for ShipRow {
    fn from(ship: &Starship) -> Self {
        Self {
            id: ship.id,
            name: ship.name.clone(),
            cost_in_credits: normalize_numeric(ship.cost_in_credits.as_ref()),
            passengers: normalize_numeric(ship.passengers.as_ref()),
            cargo_capacity: normalize_numeric(ship.cargo_capacity.as_ref()),
            hyperdrive_rating: normalize_numeric(ship.hyperdrive_rating.as_ref()),
            mglt: normalize_numeric(ship.mglt.as_ref()),
        }
    }
}

/// Render starships as an aligned table. Unknown values print as `-`.
pub fn render_ship_table(rows: &[ShipRow]) -> String {
    if rows.is_empty() {
        return "No starships available in catalog.\n".to_string();
    }

    let cell = |value: Option<f64>| value.map(format_quantity).unwrap_or_else(|| "-".into());

    let mut out = String::new();
    let _ = writeln!(out, "Available starships ({}):", rows.len());
    let _ = writeln!(
        out,
        "{:>5}  {:<30} {:>16} {:>10} {:>14} {:>10} {:>6}",
        "Id", "Name", "Cost (credits)", "Passengers", "Cargo (kg)", "Hyperdrive", "MGLT"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>5}  {:<30} {:>16} {:>10} {:>14} {:>10} {:>6}",
            row.id,
            row.name,
            cell(row.cost_in_credits),
            cell(row.passengers),
            cell(row.cargo_capacity),
            cell(row.hyperdrive_rating),
            cell(row.mglt)
        );
    }
    out
}

/// Planet summary used for JSON listings.
#[derive(Debug, Clone, Serialize)]
pub struct PlanetRow<'a> {
    pub id: PlanetId,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate: Option<&'a str>,
}

impl<'a> From<&'a Planet> for PlanetRow<'a> {
    fn from(planet: &'a Planet) -> Self {
        Self {
            id: planet.id,
            name: &planet.name,
            terrain: planet.terrain.as_deref(),
            climate: planet.climate.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewplanner_lib::{evaluate, Constraints};

    fn tatooine() -> Planet {
        Planet::new(1, "Tatooine")
            .with_terrain("desert")
            .with_climate("arid")
    }

    #[test]
    fn feasible_report_lists_route_in_order() {
        let fleet = vec![Starship::new(12, "X-wing")
            .with_cost(149_999.0)
            .with_hyperdrive(1.0)
            .with_mglt(100.0)];
        let result = evaluate(&tatooine(), &fleet, &Constraints::default());

        let text = render_evaluation(&tatooine(), &fleet, &result, ColorPalette::plain());
        assert!(text.starts_with("Mission to Tatooine  FEASIBLE"));
        assert!(text.contains("Fleet (1): X-wing"));
        assert!(text.contains("Cost:       149,999 credits"));
        assert!(text.contains("Hops:    5"));
        assert!(text.contains("1. Tatooine (#300)"));
        assert!(text.contains("4. Tatooine (#1)"));
        assert!(!text.contains("Reasons:"));
    }

    #[test]
    fn infeasible_report_lists_reasons() {
        let fleet = vec![Starship::new(75, "V-wing").with_hyperdrive("n/a")];
        let result = evaluate(&tatooine(), &fleet, &Constraints::default());

        let text = render_evaluation(&tatooine(), &fleet, &result, ColorPalette::plain());
        assert!(text.contains("NOT FEASIBLE"));
        assert!(text.contains(
            "- No starships with hyperdrive capability - cannot reach target planet"
        ));
        assert!(text.contains("Hops:    999"));
    }

    #[test]
    fn ship_rows_normalize_fields() {
        let ship = Starship::new(3, "Star Destroyer")
            .with_cost("150,000,000")
            .with_passengers("n/a");
        let row = ShipRow::from(&ship);
        assert_eq!(row.cost_in_credits, Some(150_000_000.0));
        assert_eq!(row.passengers, None);

        let table = render_ship_table(&[row]);
        assert!(table.contains("Available starships (1):"));
        assert!(table.contains("150,000,000"));
    }

    #[test]
    fn empty_listings_say_so() {
        assert_eq!(
            render_planet_table(&[]),
            "No planets available in catalog.\n"
        );
        assert_eq!(render_ship_table(&[]), "No starships available in catalog.\n");
    }

    #[test]
    fn planet_table_marks_missing_descriptors() {
        let bare = Planet::new(28, "Unknown Regions");
        let table = render_planet_table(&[&bare]);
        assert!(table.contains("Unknown Regions"));
        assert!(table.contains(" - "));
    }
}
