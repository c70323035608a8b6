use serde::Deserialize;

use crate::domain::{Person, Planet};

// ============================================================================
// SWAPI wire types
// ============================================================================

/// One page of `GET people/?search=...`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PeopleResponse {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<PersonDto>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PersonDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub homeworld: Option<String>,
}

/// `GET planets/{id}/`. SWAPI returns many more fields; only these are kept.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlanetDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub terrain: Option<String>,
    #[serde(default)]
    pub gravity: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Trims a present value, substituting `default` when the field is missing or null.
fn trimmed_or(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| default.to_string())
}

impl PersonDto {
    /// Missing name → "Unknown Character", missing homeworld → empty URL
    /// (which [`Person::planet_id`] resolves to the fallback id).
    pub fn into_domain(self) -> Person {
        Person {
            name: trimmed_or(self.name, "Unknown Character"),
            homeworld_url: trimmed_or(self.homeworld, ""),
        }
    }
}

impl PlanetDto {
    /// Every missing field becomes "Unknown".
    pub fn into_domain(self) -> Planet {
        Planet {
            name: trimmed_or(self.name, "Unknown"),
            terrain: trimmed_or(self.terrain, "Unknown"),
            gravity: trimmed_or(self.gravity, "Unknown"),
            population: trimmed_or(self.population, "Unknown"),
        }
    }
}
