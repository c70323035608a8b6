//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::Transport;
use crate::core::repository::Repository;
use crate::domain::{ApiError, FetchError, Person, Planet};

/// Transport that answers from a URL → response table and records every call.
/// Unscripted URLs answer `Server(404)`.
pub struct ScriptedTransport {
    responses: Mutex<HashMap<String, Result<String, ApiError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, url: &str, response: Result<String, ApiError>) {
        self.responses.lock().unwrap().insert(url.to_string(), response);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<String, ApiError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(Err(ApiError::Server(404)))
    }
}

/// A `people/` page body with one person per name, all from planet 1.
pub fn people_page(names: &[String], next: Option<&str>) -> String {
    let results: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "homeworld": "https://swapi.dev/api/planets/1/",
            })
        })
        .collect();

    serde_json::json!({
        "count": results.len(),
        "next": next,
        "previous": null,
        "results": results,
    })
    .to_string()
}

pub fn person(name: &str, planet_id: u32) -> Person {
    Person::new(name, format!("https://swapi.dev/api/planets/{planet_id}/"))
}

pub fn planet(name: &str) -> Planet {
    Planet {
        name: name.to_string(),
        terrain: "desert".to_string(),
        gravity: "1 standard".to_string(),
        population: "200000".to_string(),
    }
}

type Scripted<T> = (Duration, Result<T, FetchError>);

/// Repository with canned, optionally delayed, answers per query/id.
/// Calls are recorded as `search:<query>` / `planet:<id>`.
pub struct ScriptedRepository {
    searches: Mutex<HashMap<String, Scripted<Vec<Person>>>>,
    planets: Mutex<HashMap<String, Scripted<Planet>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self {
            searches: Mutex::new(HashMap::new()),
            planets: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn on_search(&self, query: &str, result: Result<Vec<Person>, FetchError>) {
        self.on_search_delayed(query, Duration::ZERO, result);
    }

    pub fn on_search_delayed(
        &self,
        query: &str,
        delay: Duration,
        result: Result<Vec<Person>, FetchError>,
    ) {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_string(), (delay, result));
    }

    pub fn on_planet(&self, id: &str, result: Result<Planet, FetchError>) {
        self.on_planet_delayed(id, Duration::ZERO, result);
    }

    pub fn on_planet_delayed(&self, id: &str, delay: Duration, result: Result<Planet, FetchError>) {
        self.planets
            .lock()
            .unwrap()
            .insert(id.to_string(), (delay, result));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Repository for ScriptedRepository {
    async fn search_people(&self, query: &str) -> Result<Vec<Person>, FetchError> {
        self.calls.lock().unwrap().push(format!("search:{query}"));
        let scripted = self.searches.lock().unwrap().get(query).cloned();
        let (delay, result) = scripted.unwrap_or((Duration::ZERO, Ok(Vec::new())));
        tokio::time::sleep(delay).await;
        result
    }

    async fn get_planet(&self, id: &str) -> Result<Planet, FetchError> {
        self.calls.lock().unwrap().push(format!("planet:{id}"));
        let scripted = self.planets.lock().unwrap().get(id).cloned();
        let (delay, result) = scripted.unwrap_or((Duration::ZERO, Err(ApiError::Server(404).into())));
        tokio::time::sleep(delay).await;
        result
    }
}
