//! # Repository
//!
//! Orchestrates the API client and hands back domain values through one
//! failure channel, [`FetchError`]. Blank input is rejected here too, so the
//! repository is safe to call directly without going through a use case.

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use crate::api::{HttpTransport, SwapiClient};
use crate::core::config::ResolvedConfig;
use crate::domain::{ApiError, FetchError, Person, Planet, ValidationError};

#[async_trait]
pub trait Repository: Send + Sync {
    async fn search_people(&self, query: &str) -> Result<Vec<Person>, FetchError>;

    async fn get_planet(&self, id: &str) -> Result<Planet, FetchError>;
}

pub struct StarWarsRepository {
    api: SwapiClient,
}

impl StarWarsRepository {
    pub fn new(api: SwapiClient) -> Self {
        Self { api }
    }

    /// Wires a reqwest transport and API client from resolved settings.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, ApiError> {
        let transport = Arc::new(HttpTransport::new(config.timeout)?);
        let api = SwapiClient::new(transport, &config.base_url, config.max_pages)?;
        info!(
            "Repository ready: base_url={}, timeout={:?}, max_pages={}",
            config.base_url, config.timeout, config.max_pages
        );
        Ok(Self::new(api))
    }
}

#[async_trait]
impl Repository for StarWarsRepository {
    async fn search_people(&self, query: &str) -> Result<Vec<Person>, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }

        match self.api.search_people(query).await {
            Ok(people) => Ok(people),
            Err(e) => {
                warn!("Search '{}' failed: {:?}", query, e);
                Err(e.into())
            }
        }
    }

    async fn get_planet(&self, id: &str) -> Result<Planet, FetchError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ValidationError::EmptyPlanetId.into());
        }

        info!("Fetching planet {}", id);
        self.api.get_planet(id).await.map_err(|e| {
            warn!("Planet {} failed: {:?}", id, e);
            FetchError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DEFAULT_MAX_PAGES;
    use crate::test_support::{ScriptedTransport, people_page};

    const BASE: &str = "https://swapi.test/api/";

    fn repository(transport: &Arc<ScriptedTransport>) -> StarWarsRepository {
        StarWarsRepository::new(SwapiClient::new(transport.clone(), BASE, DEFAULT_MAX_PAGES).unwrap())
    }

    #[tokio::test]
    async fn test_blank_query_is_validation_error_without_request() {
        let transport = Arc::new(ScriptedTransport::new());
        let err = repository(&transport).search_people(" \t ").await.unwrap_err();
        assert_eq!(err, FetchError::Validation(ValidationError::EmptyQuery));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_query_is_trimmed() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(
            &format!("{BASE}people/?search=luke"),
            Ok(people_page(&["Luke Skywalker".to_string()], None)),
        );

        let people = repository(&transport).search_people("  luke ").await.unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(transport.calls(), vec![format!("{BASE}people/?search=luke")]);
    }

    #[tokio::test]
    async fn test_transport_failure_is_api_error() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(&format!("{BASE}planets/9/"), Err(ApiError::Timeout));

        let err = repository(&transport).get_planet("9").await.unwrap_err();
        assert_eq!(err, FetchError::Api(ApiError::Timeout));
    }

    #[tokio::test]
    async fn test_blank_planet_id_is_validation_error() {
        let transport = Arc::new(ScriptedTransport::new());
        let err = repository(&transport).get_planet("").await.unwrap_err();
        assert_eq!(err.to_string(), "Planet ID cannot be empty");
        assert!(transport.calls().is_empty());
    }
}
