//! Text and JSON rendering of slot states.

use serde::Serialize;

use crate::OutputFormat;
use crate::core::UiState;
use crate::domain::{Person, Planet};

#[derive(Serialize)]
struct PersonView<'a> {
    name: &'a str,
    homeworld_url: &'a str,
    planet_id: String,
}

#[derive(Serialize)]
struct PlanetView<'a> {
    name: &'a str,
    terrain: &'a str,
    gravity: &'a str,
    population: String,
}

#[derive(Serialize)]
struct ErrorView<'a> {
    error: &'a str,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

pub fn people(people: &[Person], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => people
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{:>3}. {} (planet {})", i + 1, p.display_name(), p.planet_id()))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let views: Vec<PersonView<'_>> = people
                .iter()
                .map(|p| PersonView {
                    name: p.display_name(),
                    homeworld_url: &p.homeworld_url,
                    planet_id: p.planet_id(),
                })
                .collect();
            to_json(&views)
        }
    }
}

pub fn planet(planet: &Planet, format: OutputFormat) -> String {
    let view = PlanetView {
        name: planet.display_name(),
        terrain: planet.display_terrain(),
        gravity: planet.display_gravity(),
        population: planet.display_population(),
    };
    match format {
        OutputFormat::Text => format!(
            "{}\n  Terrain:    {}\n  Gravity:    {}\n  Population: {}",
            view.name, view.terrain, view.gravity, view.population
        ),
        OutputFormat::Json => to_json(&view),
    }
}

pub fn error(message: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Error: {message}"),
        OutputFormat::Json => to_json(&ErrorView { error: message }),
    }
}

/// Renders any slot state; `Idle` renders as nothing.
pub fn state<T>(
    state: &UiState<T>,
    format: OutputFormat,
    success: impl Fn(&T, OutputFormat) -> String,
) -> Option<String> {
    match state {
        UiState::Idle => None,
        UiState::Loading => match format {
            OutputFormat::Text => Some("Loading...".to_string()),
            OutputFormat::Json => None,
        },
        UiState::Success(data) => Some(success(data, format)),
        UiState::Error { message, .. } => Some(error(message, format)),
    }
}
