//! SWAPI endpoint operations.
//!
//! Builds request URLs, follows `next` links for people searches, and decodes
//! each body into DTOs which are mapped to domain records page by page.

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::Url;

use crate::api::client::Transport;
use crate::api::types::{PeopleResponse, PlanetDto};
use crate::domain::{ApiError, Person, Planet};

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/";

/// Upper bound on pages fetched for one search, guards against `next` loops.
pub const DEFAULT_MAX_PAGES: usize = 10;

pub struct SwapiClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    max_pages: usize,
}

impl SwapiClient {
    /// `base_url` gets a trailing slash if it lacks one so relative joins keep its path.
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: &str,
        max_pages: usize,
    ) -> Result<Self, ApiError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| ApiError::Unknown(format!("Invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            transport,
            base_url,
            max_pages,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Unknown(format!("Invalid request path '{path}': {e}")))
    }

    /// `people/?search=<query>` for an already-trimmed query.
    pub fn search_url(&self, query: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint("people/")?;
        url.query_pairs_mut().append_pair("search", query);
        Ok(url)
    }

    pub fn planet_url(&self, id: &str) -> Result<Url, ApiError> {
        self.endpoint(&format!("planets/{id}/"))
    }

    /// Searches people by name, following pagination until `next` runs out or
    /// `max_pages` pages have been fetched.
    ///
    /// Results keep page order, then in-page order.
    pub async fn search_people(&self, query: &str) -> Result<Vec<Person>, ApiError> {
        let mut people = Vec::new();
        let mut next_url = Some(self.search_url(query)?.to_string());
        let mut page_count = 0usize;

        while let Some(url) = next_url.take() {
            if page_count >= self.max_pages {
                warn!(
                    "Search '{}' stopped at page cap ({}), more results were available",
                    query, self.max_pages
                );
                break;
            }

            let body = self.transport.get(&url).await?;
            let page: PeopleResponse = serde_json::from_str(&body)
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")))?;
            page_count += 1;

            debug!(
                "Search '{}' page {}: {} results (count={}, has_next={})",
                query,
                page_count,
                page.results.len(),
                page.count,
                page.next.is_some()
            );

            people.extend(page.results.into_iter().map(|dto| dto.into_domain()));
            next_url = page.next;
        }

        info!(
            "Search '{}' complete: {} people across {} pages",
            query,
            people.len(),
            page_count
        );
        Ok(people)
    }

    /// Fetches a single planet by id.
    pub async fn get_planet(&self, id: &str) -> Result<Planet, ApiError> {
        let url = self.planet_url(id)?;
        let body = self.transport.get(url.as_str()).await?;
        let dto: PlanetDto = serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("Failed to parse planet data: {e}")))?;
        info!("Loaded planet {}: {:?}", id, dto.name);
        Ok(dto.into_domain())
    }
}
