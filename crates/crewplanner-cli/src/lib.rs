//! Crew planner CLI library.
//!
//! Terminal styling and output rendering for the `crewplanner` binary, kept
//! in a library target so the formatting can be unit tested.

pub mod output;
pub mod terminal;
