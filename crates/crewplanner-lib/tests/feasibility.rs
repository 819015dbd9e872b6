mod common;

use crewplanner_lib::feasibility::{FleetSummary, MAX_INTERMEDIATE_WAYPOINTS};
use crewplanner_lib::{evaluate, normalize_numeric, Constraints, UNREACHABLE_HOPS};

use common::{planet, ships};

#[test]
fn x_wing_to_tatooine_matches_worked_example() {
    let result = evaluate(&planet("Tatooine"), &ships(&["X-wing"]), &Constraints::default());

    assert!(result.ok);
    assert!(result.reasons.is_empty());
    assert_eq!(result.hops, 5);
    assert_eq!(result.refuels, 3);
    assert_eq!(result.suggested_route.len(), 4);
    assert_eq!(result.suggested_route.last().unwrap().name, "Tatooine");
}

#[test]
fn falcon_to_hoth_needs_many_short_jumps() {
    // frozen -> 6, ceil(6 / 0.5) = 12 hops, floor(75 / 50) = 1 speed credit
    let result = evaluate(
        &planet("Hoth"),
        &ships(&["Millennium Falcon"]),
        &Constraints::default(),
    );

    assert!(result.ok);
    assert_eq!(result.hops, 12);
    assert_eq!(result.refuels, 11);
    assert_eq!(result.totals.passengers, 6.0);
}

#[test]
fn largest_hyperdrive_rating_sets_hop_count() {
    // Slave 1 rates 3.0, so ceil(5 / 3) = 2 hops; average MGLT 85 gives one credit.
    let result = evaluate(
        &planet("Tatooine"),
        &ships(&["X-wing", "Slave 1"]),
        &Constraints::default(),
    );

    assert_eq!(result.hops, 2);
    assert_eq!(result.refuels, 1);
    let names: Vec<&str> = result
        .suggested_route
        .iter()
        .map(|stop| stop.name.as_str())
        .collect();
    assert_eq!(names, vec!["Coruscant", "Tatooine"]);
}

#[test]
fn fleet_without_hyperdrive_is_unreachable_regardless_of_constraints() {
    for constraints in [
        Constraints::default(),
        Constraints {
            budget: Some(1_000_000.0),
            max_stops: Some(5),
            ..Constraints::default()
        },
    ] {
        let result = evaluate(&planet("Endor"), &ships(&["V-wing"]), &constraints);

        assert!(!result.ok);
        assert_eq!(result.hops, UNREACHABLE_HOPS);
        assert!(result
            .reasons
            .iter()
            .any(|r| r.contains("No starships with hyperdrive capability")));
    }
}

#[test]
fn totals_match_the_sum_of_normalized_fields() {
    let fleet = ships(&[
        "CR90 corvette",
        "Star Destroyer",
        "TIE Advanced x1",
        "Slave 1",
        "V-wing",
    ]);
    let result = evaluate(&planet("Coruscant"), &fleet, &Constraints::default());

    let expected_cost: f64 = fleet
        .iter()
        .map(|ship| normalize_numeric(ship.cost_in_credits.as_ref()).unwrap_or(0.0))
        .sum();
    let expected_cargo: f64 = fleet
        .iter()
        .map(|ship| normalize_numeric(ship.cargo_capacity.as_ref()).unwrap_or(0.0))
        .sum();

    assert_eq!(result.totals.cost, expected_cost);
    assert_eq!(result.totals.cargo, expected_cargo);
    assert_eq!(result.totals.passengers, 606.0);
    assert_eq!(result.totals.cost, 153_602_500.0);
    assert_eq!(result.totals, FleetSummary::from_fleet(&fleet).totals);
}

#[test]
fn budget_and_capacity_reasons_use_grouped_numbers() {
    let constraints = Constraints {
        budget: Some(1_000_000.0),
        cargo_kg: Some(50_000_000.0),
        ..Constraints::default()
    };
    let result = evaluate(
        &planet("Alderaan"),
        &ships(&["Star Destroyer"]),
        &constraints,
    );

    assert_eq!(
        result.reasons,
        vec![
            "Total cost (150,000,000 credits) exceeds budget (1,000,000 credits)",
            "Cargo capacity (36,000,000 kg) is below minimum requirement (50,000,000 kg)",
        ]
    );
}

#[test]
fn evaluation_is_idempotent() {
    let destination = planet("Dagobah");
    let fleet = ships(&["Y-wing", "Sentinel-class landing craft"]);
    let constraints = Constraints {
        min_passengers: Some(100.0),
        max_stops: Some(1),
        ..Constraints::default()
    };

    let first = evaluate(&destination, &fleet, &constraints);
    let second = evaluate(&destination, &fleet, &constraints);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn route_length_is_bounded_by_hops() {
    let catalog = common::fixture_catalog();
    for destination in catalog.planets_sorted() {
        for ship in catalog.starships_sorted() {
            let result = evaluate(destination, std::slice::from_ref(ship), &Constraints::default());
            let bound = result
                .hops
                .saturating_sub(1)
                .min(u64::from(MAX_INTERMEDIATE_WAYPOINTS))
                + 1;

            assert!(result.suggested_route.len() as u64 <= bound);
            assert_eq!(
                result.suggested_route.last().unwrap().planet_id,
                destination.id
            );
            assert_eq!(result.ok, result.reasons.is_empty());
        }
    }
}

#[test]
fn destination_without_descriptors_uses_baseline_distance() {
    let result = evaluate(
        &planet("Unknown Regions"),
        &ships(&["X-wing"]),
        &Constraints::default(),
    );
    assert_eq!(result.hops, 5);
}
