mod common;

use std::io::Write;

use crewplanner_lib::{Catalog, Error};
use tempfile::NamedTempFile;

use common::{fixture_catalog, fixtures_dir};

#[test]
fn fixture_catalog_loads_with_source_path() {
    let catalog = fixture_catalog();

    assert_eq!(catalog.planet_count(), 10);
    assert_eq!(catalog.starship_count(), 9);
    assert_eq!(
        catalog.source_path(),
        Some(fixtures_dir().join("catalog.json").as_path())
    );
}

#[test]
fn unknown_fields_in_records_are_ignored() {
    let catalog = fixture_catalog();
    let tatooine = catalog.planet(1).expect("Tatooine present");
    assert_eq!(tatooine.terrain.as_deref(), Some("desert"));
}

#[test]
fn unknown_starship_name_suggests_close_matches() {
    let catalog = fixture_catalog();
    let err = catalog.find_starship("Millenium Falcon").unwrap_err();

    assert!(matches!(err, Error::UnknownStarship { .. }));
    assert!(err.to_string().contains("Millennium Falcon"));
}

#[test]
fn malformed_json_surfaces_parse_error() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{{\"planets\": [").expect("write");

    let err = Catalog::from_path(file.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn record_without_name_is_rejected() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"planets": [{{"id": 1, "name": ""}}], "starships": []}}"#
    )
    .expect("write");

    let err = Catalog::from_path(file.path()).unwrap_err();
    assert!(matches!(err, Error::CatalogValidation { .. }));
}
