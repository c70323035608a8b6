//! # SWAPI access
//!
//! - [`client`]: the [`Transport`] trait and its reqwest implementation
//! - [`types`]: wire DTOs and their domain mappers
//! - [`swapi`]: endpoint operations (paginated people search, planet lookup)

pub mod client;
pub mod swapi;
pub mod types;

pub use client::{DEFAULT_TIMEOUT, HttpTransport, Transport};
pub use swapi::{DEFAULT_BASE_URL, DEFAULT_MAX_PAGES, SwapiClient};
pub use types::{PeopleResponse, PersonDto, PlanetDto};
