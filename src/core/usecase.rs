//! # Use Cases
//!
//! Thin entry points the view model calls: validate, trim, delegate.

use std::sync::Arc;

use crate::core::repository::Repository;
use crate::domain::{FetchError, Person, Planet, ValidationError};

#[derive(Clone)]
pub struct SearchPeople {
    repository: Arc<dyn Repository>,
}

impl SearchPeople {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, query: &str) -> Result<Vec<Person>, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }
        self.repository.search_people(query).await
    }
}

#[derive(Clone)]
pub struct GetPlanet {
    repository: Arc<dyn Repository>,
}

impl GetPlanet {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, planet_id: &str) -> Result<Planet, FetchError> {
        let planet_id = planet_id.trim();
        if planet_id.is_empty() {
            return Err(ValidationError::EmptyPlanetId.into());
        }
        self.repository.get_planet(planet_id).await
    }
}
