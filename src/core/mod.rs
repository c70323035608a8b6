//! # Core Application Logic
//!
//! Everything between the API client and a front end. It knows nothing
//! about any specific UI technology.
//!
//! ```text
//!   front end ──commands──► StarWarsViewModel ──► use cases ──► Repository ──► SwapiClient
//!       ▲                          │
//!       └──── watch receivers ─────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`]: settings and their override hierarchy
//! - [`state`]: `UiState`, the value every observable slot holds
//! - [`repository`]: the `Repository` trait and its SWAPI-backed implementation
//! - [`usecase`]: input validation in front of the repository
//! - [`view_model`]: the state holder front ends drive

pub mod config;
pub mod repository;
pub mod state;
pub mod usecase;
pub mod view_model;

pub use repository::{Repository, StarWarsRepository};
pub use state::UiState;
pub use usecase::{GetPlanet, SearchPeople};
pub use view_model::{StarWarsViewModel, settled};
