//! Upstream resource models for the Star Wars API
//!
//! The catalog reports every numeric field as a string (and `"unknown"` when it
//! has no value), so the models keep them as strings and leave interpretation
//! to the presentation layer. Missing fields deserialize to empty values.

pub mod client;

pub use client::{FetchError, SwapiClient};

use serde::{Deserialize, Serialize};

/// A paginated collection response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// Items on this page, in upstream order
    pub results: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            results: Vec::new(),
        }
    }
}

/// A character (`people/{id}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub birth_year: String,
    /// URLs of the films the character appears in
    pub films: Vec<String>,
}

/// A starship (`starships/`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub max_atmosphering_speed: String,
    pub hyperdrive_rating: String,
    pub pilots: Vec<String>,
}

/// A planet (`planets/`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Planet {
    pub name: String,
    pub population: String,
    /// Diameter in kilometres
    pub diameter: String,
    pub climate: String,
    pub films: Vec<String>,
}

/// A film (`films/`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Film {
    pub title: String,
    /// Release date as `YYYY-MM-DD`
    pub release_date: String,
    pub director: String,
    pub producer: String,
    pub characters: Vec<String>,
    pub planets: Vec<String>,
}

/// A vehicle (`vehicles/{id}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub crew: String,
    pub passengers: String,
}
