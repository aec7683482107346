//! Text rendering of upstream resources for the operator console
//!
//! Each function turns one resource into a block of lines. Blocks start with
//! an empty line so consecutive sections are visually separated, and always
//! end with a newline.

use std::fmt::Write;

use crate::config::UNKNOWN_SENTINEL;
use crate::data::{Film, Person, Planet, Starship, Vehicle};

/// Details of the featured character
pub fn character(person: &Person) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Character ---");
    let _ = writeln!(out, "Name: {}", person.name);
    let _ = writeln!(out, "Height: {}", person.height);
    let _ = writeln!(out, "Mass: {}", person.mass);
    let _ = writeln!(out, "Birth year: {}", person.birth_year);
    if !person.films.is_empty() {
        let _ = writeln!(out, "Appears in {} films", person.films.len());
    }
    out
}

/// Header of the starships section
pub fn starships_header(total: u64) -> String {
    format!("\n--- Starships ---\nTotal: {}\n", total)
}

/// Details of one starship; `index` is zero-based
pub fn starship(ship: &Starship, index: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Starship {} ---", index + 1);
    let _ = writeln!(out, "Name: {}", ship.name);
    let _ = writeln!(out, "Model: {}", ship.model);
    let _ = writeln!(out, "Manufacturer: {}", ship.manufacturer);
    let _ = writeln!(out, "Cost: {}", cost(&ship.cost_in_credits));
    let _ = writeln!(out, "Speed: {}", ship.max_atmosphering_speed);
    let _ = writeln!(out, "Hyperdrive rating: {}", ship.hyperdrive_rating);
    if !ship.pilots.is_empty() {
        let _ = writeln!(out, "Pilots: {}", ship.pilots.len());
    }
    out
}

/// Header of the large planets section
pub fn planets_header() -> String {
    "\n--- Large, Populous Planets ---\n".to_string()
}

/// One-line summary of a planet, plus its film count when known
pub fn planet(planet: &Planet) -> String {
    let mut out = format!(
        "- {}: Pop: {}, Diameter: {}, Climate: {}\n",
        planet.name, planet.population, planet.diameter, planet.climate
    );
    if !planet.films.is_empty() {
        let _ = writeln!(out, "  Appears in {} films", planet.films.len());
    }
    out
}

/// Header of the films section
pub fn films_header() -> String {
    "\n--- Star Wars Films (Chronological Order) ---\n".to_string()
}

/// Details of one film; `index` is zero-based
pub fn film(film: &Film, index: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}. {} ({})", index + 1, film.title, film.release_date);
    let _ = writeln!(out, "   Director: {}", film.director);
    let _ = writeln!(out, "   Producer: {}", film.producer);
    let _ = writeln!(out, "   Characters: {}", film.characters.len());
    let _ = writeln!(out, "   Planets: {}", film.planets.len());
    out
}

/// Details of the featured vehicle
pub fn vehicle(vehicle: &Vehicle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Featured Vehicle ---");
    let _ = writeln!(out, "Name: {}", vehicle.name);
    let _ = writeln!(out, "Model: {}", vehicle.model);
    let _ = writeln!(out, "Manufacturer: {}", vehicle.manufacturer);
    let _ = writeln!(out, "Cost: {} credits", vehicle.cost_in_credits);
    let _ = writeln!(out, "Length: {}", vehicle.length);
    let _ = writeln!(out, "Required crew: {}", vehicle.crew);
    let _ = writeln!(out, "Passengers: {}", vehicle.passengers);
    out
}

/// Cost in credits, or `unknown` when upstream has no value
fn cost(cost_in_credits: &str) -> String {
    if cost_in_credits == UNKNOWN_SENTINEL {
        UNKNOWN_SENTINEL.to_string()
    } else {
        format!("{} credits", cost_in_credits)
    }
}
