//! # View Model
//!
//! Owns the three observable values front ends render from:
//!
//! ```text
//! StarWarsViewModel
//! ├── search: Slot<Vec<Person>>   // people search results
//! ├── planet: Slot<Planet>        // selected homeworld
//! └── query:  watch<String>       // current search text
//! ```
//!
//! Each slot runs at most one request at a time. Starting a new request on a
//! slot aborts the previous task and bumps the slot's generation; a task only
//! publishes if its generation is still current. The bump and the check both
//! happen under the watch channel's write lock, so a late result from a
//! superseded request can never overwrite a newer state.
//!
//! Front ends observe through `subscribe_*` receivers rather than polling.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::core::repository::Repository;
use crate::core::state::UiState;
use crate::core::usecase::{GetPlanet, SearchPeople};
use crate::domain::{Person, Planet, ValidationError};

/// One independently managed state machine.
struct Slot<T> {
    state: Arc<watch::Sender<UiState<T>>>,
    generation: Arc<AtomicU64>,
    task: Option<AbortHandle>,
}

impl<T> Slot<T> {
    fn new() -> Self {
        let (state, _) = watch::channel(UiState::Idle);
        Self {
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    /// Cancels whatever is in flight and installs `next`. Returns the new generation.
    fn supersede(&mut self, next: UiState<T>) -> u64 {
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let generation = &self.generation;
        let mut issued = 0;
        self.state.send_modify(|state| {
            issued = generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = next;
        });
        issued
    }

    fn publisher(&self, generation: u64) -> Publisher<T> {
        Publisher {
            state: self.state.clone(),
            current: self.generation.clone(),
            generation,
        }
    }
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Handed to a spawned request so it can report back to its slot.
struct Publisher<T> {
    state: Arc<watch::Sender<UiState<T>>>,
    current: Arc<AtomicU64>,
    generation: u64,
}

impl<T> Publisher<T> {
    /// Installs `next` unless a newer request has taken over the slot.
    fn publish(&self, next: UiState<T>) -> bool {
        self.state.send_if_modified(|state| {
            if self.current.load(Ordering::SeqCst) != self.generation {
                return false;
            }
            *state = next;
            true
        })
    }
}

pub struct StarWarsViewModel {
    search_people: SearchPeople,
    get_planet: GetPlanet,
    runtime: Handle,
    search: Slot<Vec<Person>>,
    planet: Slot<Planet>,
    query: watch::Sender<String>,
    last_query: Option<String>,
    last_planet_id: Option<String>,
}

impl StarWarsViewModel {
    /// Requests are spawned onto `runtime`; state is published back through watch channels.
    pub fn new(repository: Arc<dyn Repository>, runtime: Handle) -> Self {
        Self::with_use_cases(
            SearchPeople::new(repository.clone()),
            GetPlanet::new(repository),
            runtime,
        )
    }

    pub fn with_use_cases(search_people: SearchPeople, get_planet: GetPlanet, runtime: Handle) -> Self {
        let (query, _) = watch::channel(String::new());
        Self {
            search_people,
            get_planet,
            runtime,
            search: Slot::new(),
            planet: Slot::new(),
            query,
            last_query: None,
            last_planet_id: None,
        }
    }

    // ------------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------------

    pub fn search_state(&self) -> UiState<Vec<Person>> {
        self.search.state.borrow().clone()
    }

    pub fn planet_state(&self) -> UiState<Planet> {
        self.planet.state.borrow().clone()
    }

    pub fn query(&self) -> String {
        self.query.borrow().clone()
    }

    pub fn subscribe_search(&self) -> watch::Receiver<UiState<Vec<Person>>> {
        self.search.state.subscribe()
    }

    pub fn subscribe_planet(&self) -> watch::Receiver<UiState<Planet>> {
        self.planet.state.subscribe()
    }

    pub fn subscribe_query(&self) -> watch::Receiver<String> {
        self.query.subscribe()
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    pub fn update_query(&mut self, query: &str) {
        self.query.send_replace(query.to_string());
    }

    /// Starts a people search, superseding any search already in flight.
    ///
    /// A blank query goes straight to `Error` without a request.
    pub fn search(&mut self, query: &str) {
        let query = query.trim().to_string();
        if query.is_empty() {
            debug!("Rejecting blank search query");
            self.search.supersede(UiState::failed(ValidationError::EmptyQuery.into()));
            return;
        }

        info!("Search requested: '{}'", query);
        self.last_query = Some(query.clone());
        let generation = self.search.supersede(UiState::Loading);
        let publisher = self.search.publisher(generation);
        let use_case = self.search_people.clone();

        let handle = self.runtime.spawn(async move {
            let next = match use_case.execute(&query).await {
                Ok(people) if people.is_empty() => {
                    UiState::error(format!("No characters found for '{query}'"))
                }
                Ok(people) => UiState::Success(people),
                Err(e) => UiState::failed(e),
            };
            if !publisher.publish(next) {
                debug!("Discarding stale search result for '{}' (generation {})", query, generation);
            }
        });
        self.search.task = Some(handle.abort_handle());
    }

    /// Loads a planet, superseding any planet request already in flight.
    pub fn load_planet(&mut self, planet_id: &str) {
        let planet_id = planet_id.trim().to_string();
        if !planet_id.is_empty() {
            self.last_planet_id = Some(planet_id.clone());
        }

        info!("Planet requested: '{}'", planet_id);
        let generation = self.planet.supersede(UiState::Loading);
        let publisher = self.planet.publisher(generation);
        let use_case = self.get_planet.clone();

        let handle = self.runtime.spawn(async move {
            let next = match use_case.execute(&planet_id).await {
                Ok(planet) => UiState::Success(planet),
                Err(e) => UiState::failed(e),
            };
            if !publisher.publish(next) {
                debug!("Discarding stale planet result for '{}' (generation {})", planet_id, generation);
            }
        });
        self.planet.task = Some(handle.abort_handle());
    }

    /// Resets the planet slot to `Idle`; a pending planet result is dropped.
    pub fn clear_planet(&mut self) {
        self.planet.supersede(UiState::Idle);
    }

    pub fn clear_search(&mut self) {
        self.search.supersede(UiState::Idle);
    }

    /// Re-runs the search with the current query text, or the last submitted query.
    pub fn retry_search(&mut self) {
        let current = self.query();
        let query = if current.trim().is_empty() {
            self.last_query.clone()
        } else {
            Some(current)
        };

        match query {
            Some(query) => self.search(&query),
            None => debug!("Nothing to retry: no search has been made"),
        }
    }

    /// Re-runs the planet lookup for `planet_id`, or the last requested id if blank.
    pub fn retry_planet(&mut self, planet_id: &str) {
        let planet_id = if planet_id.trim().is_empty() {
            self.last_planet_id.clone()
        } else {
            Some(planet_id.to_string())
        };

        match planet_id {
            Some(id) => self.load_planet(&id),
            None => debug!("Nothing to retry: no planet has been requested"),
        }
    }
}

/// Waits until the slot behind `receiver` settles on `Success` or `Error`.
///
/// Returns `None` if the view model was dropped first.
pub async fn settled<T: Clone>(receiver: &mut watch::Receiver<UiState<T>>) -> Option<UiState<T>> {
    receiver
        .wait_for(UiState::is_terminal)
        .await
        .ok()
        .map(|state| (*state).clone())
}
