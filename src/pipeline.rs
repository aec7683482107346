//! The five-step presentation pipeline
//!
//! Steps run strictly in order: character, starships, planets, films, vehicle.
//! A step's fetch is only issued once the previous step has written its
//! output, and the first failing step ends the run. Documents fetched by
//! earlier steps stay cached even when a later step fails.

use std::io::Write;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{
    LARGE_PLANET_MIN_DIAMETER, LARGE_PLANET_MIN_POPULATION, STARSHIPS_SHOWN, UNKNOWN_SENTINEL,
    VEHICLE_MIN_INDEX,
};
use crate::data::{FetchError, Film, Page, Person, Planet, Starship, SwapiClient, Vehicle};
use crate::render;

/// First page of the starship collection
pub const STARSHIPS_PATH: &str = "starships/?page=1";

/// First page of the planet collection
pub const PLANETS_PATH: &str = "planets/?page=1";

/// Film collection
pub const FILMS_PATH: &str = "films/";

/// Errors that end a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A fetch failed (already counted and logged by the client)
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The document parsed, but not into the expected resource shape
    #[error("unexpected document shape for {path}: {source}")]
    Shape {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the presentation output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Path of the character shown for a given person index
pub fn person_path(index: u64) -> String {
    format!("people/{}", index)
}

/// Path of the featured vehicle, if the vehicle step runs for this index
pub fn vehicle_path(index: u64) -> Option<String> {
    (index >= VEHICLE_MIN_INDEX).then(|| format!("vehicles/{}", index))
}

/// Parses an upstream count field, treating the `unknown` sentinel as absent
fn parse_count(value: &str) -> Option<u64> {
    if value == UNKNOWN_SENTINEL {
        return None;
    }
    value.trim().parse().ok()
}

/// Whether a planet is both populous and large enough to be listed
///
/// Population and diameter must be known numbers, strictly above their
/// thresholds.
pub fn is_large_populous(planet: &Planet) -> bool {
    parse_count(&planet.population).is_some_and(|p| p > LARGE_PLANET_MIN_POPULATION)
        && parse_count(&planet.diameter).is_some_and(|d| d > LARGE_PLANET_MIN_DIAMETER)
}

/// Sorts films by calendar release date, oldest first
///
/// Films whose date does not parse as `YYYY-MM-DD` go last, in their
/// original order.
pub fn sort_by_release_date(films: &mut [Film]) {
    films.sort_by_cached_key(|film| {
        let date = NaiveDate::parse_from_str(film.release_date.trim(), "%Y-%m-%d").ok();
        (date.is_none(), date)
    });
}

/// Runs all five steps for `person_index`, writing each step's output to `out`
pub async fn run<W>(client: &SwapiClient, person_index: u64, out: &mut W) -> Result<(), PipelineError>
where
    W: Write + Send,
{
    character_step(client, person_index, out).await?;
    starships_step(client, out).await?;
    planets_step(client, out).await?;
    films_step(client, out).await?;
    vehicle_step(client, person_index, out).await?;
    Ok(())
}

/// Fetches `path` and reads it as `T`
async fn fetch_as<T: DeserializeOwned>(client: &SwapiClient, path: &str) -> Result<T, PipelineError> {
    let document = client.fetch(path).await?;
    T::deserialize(&*document).map_err(|source| PipelineError::Shape {
        path: path.to_string(),
        source,
    })
}

async fn character_step<W: Write + Send>(
    client: &SwapiClient,
    person_index: u64,
    out: &mut W,
) -> Result<(), PipelineError> {
    let person: Person = fetch_as(client, &person_path(person_index)).await?;
    out.write_all(render::character(&person).as_bytes())?;
    Ok(())
}

async fn starships_step<W: Write + Send>(client: &SwapiClient, out: &mut W) -> Result<(), PipelineError> {
    let page: Page<Starship> = fetch_as(client, STARSHIPS_PATH).await?;

    out.write_all(render::starships_header(page.count).as_bytes())?;
    for (index, ship) in page.results.iter().take(STARSHIPS_SHOWN).enumerate() {
        out.write_all(render::starship(ship, index).as_bytes())?;
    }
    Ok(())
}

async fn planets_step<W: Write + Send>(client: &SwapiClient, out: &mut W) -> Result<(), PipelineError> {
    let page: Page<Planet> = fetch_as(client, PLANETS_PATH).await?;

    out.write_all(render::planets_header().as_bytes())?;
    for planet in page.results.iter().filter(|p| is_large_populous(p)) {
        out.write_all(render::planet(planet).as_bytes())?;
    }
    Ok(())
}

async fn films_step<W: Write + Send>(client: &SwapiClient, out: &mut W) -> Result<(), PipelineError> {
    let mut page: Page<Film> = fetch_as(client, FILMS_PATH).await?;
    sort_by_release_date(&mut page.results);

    out.write_all(render::films_header().as_bytes())?;
    for (index, film) in page.results.iter().enumerate() {
        out.write_all(render::film(film, index).as_bytes())?;
    }
    Ok(())
}

async fn vehicle_step<W: Write + Send>(
    client: &SwapiClient,
    person_index: u64,
    out: &mut W,
) -> Result<(), PipelineError> {
    let Some(path) = vehicle_path(person_index) else {
        return Ok(());
    };

    let vehicle: Vehicle = fetch_as(client, &path).await?;
    out.write_all(render::vehicle(&vehicle).as_bytes())?;
    Ok(())
}
