//! # CLI Adapter
//!
//! Line-oriented front end over [`StarWarsViewModel`]. One-shot commands
//! wait for the slot to settle and print it; the interactive session prints
//! every state change from subscriber tasks while reading commands from stdin.

pub mod render;

use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::OutputFormat;
use crate::core::{StarWarsViewModel, UiState, settled};
use crate::domain::Person;

/// A parsed line from the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    /// Load a planet by id.
    Planet(String),
    /// Load the homeworld of the n-th (1-based) search result.
    Pick(usize),
    Retry,
    Clear,
    Help,
    Quit,
    Invalid(String),
}

pub const HELP: &str = "\
Type a name to search, or:
  :pick <n>     show the homeworld of result n
  :planet <id>  show a planet by id
  :retry        retry the last failed request
  :clear        close the planet view
  :quit         exit";

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Search(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    match (name, arg) {
        ("planet", Some(id)) => Command::Planet(id.to_string()),
        ("pick", Some(n)) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Command::Pick(n),
            _ => Command::Invalid(format!("Not a result number: {n}")),
        },
        ("retry", None) => Command::Retry,
        ("clear", None) => Command::Clear,
        ("help", None) => Command::Help,
        ("quit" | "q", None) => Command::Quit,
        _ => Command::Invalid(format!("Unknown command: {line}")),
    }
}

/// Runs a single search and prints the result. Returns false if it ended in an error.
pub async fn run_search(vm: &mut StarWarsViewModel, query: &str, format: OutputFormat) -> bool {
    let mut rx = vm.subscribe_search();
    vm.update_query(query);
    vm.search(query);
    let state = settled(&mut rx).await.unwrap_or_else(|| UiState::error("Search was cancelled"));
    print_state(&state, format, |people, f| render::people(people, f));
    !matches!(state, UiState::Error { .. })
}

/// Loads a single planet and prints it. Returns false if it ended in an error.
pub async fn run_planet(vm: &mut StarWarsViewModel, id: &str, format: OutputFormat) -> bool {
    let mut rx = vm.subscribe_planet();
    vm.load_planet(id);
    let state = settled(&mut rx).await.unwrap_or_else(|| UiState::error("Lookup was cancelled"));
    print_state(&state, format, render::planet);
    !matches!(state, UiState::Error { .. })
}

fn print_state<T>(state: &UiState<T>, format: OutputFormat, success: impl Fn(&T, OutputFormat) -> String) {
    if let Some(text) = render::state(state, format, success) {
        println!("{text}");
    }
}

/// Prints every value the slot publishes until the view model goes away.
fn spawn_printer<T>(
    mut rx: watch::Receiver<UiState<T>>,
    label: &'static str,
    format: OutputFormat,
    success: fn(&T, OutputFormat) -> String,
) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            debug!("{} state changed: loading={}", label, state.is_loading());
            if let Some(text) = render::state(&state, format, success) {
                println!("[{label}] {text}");
            }
        }
    })
}

/// Interactive session reading commands from stdin until `:quit` or EOF.
pub async fn run_interactive(mut vm: StarWarsViewModel, format: OutputFormat) -> std::io::Result<()> {
    println!("{HELP}");
    let printers = [
        spawn_printer(vm.subscribe_search(), "search", format, |people: &Vec<Person>, f| {
            render::people(people, f)
        }),
        spawn_printer(vm.subscribe_planet(), "planet", format, render::planet),
    ];

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Command::Search(query) => {
                if vm.search_state().is_loading() && vm.query().trim() == query {
                    println!("Search for '{query}' is already in progress");
                    continue;
                }
                vm.update_query(&query);
                vm.search(&query);
            }
            Command::Planet(id) => vm.load_planet(&id),
            Command::Pick(n) => {
                let planet_id = vm
                    .search_state()
                    .data()
                    .and_then(|people| people.get(n - 1))
                    .map(|person| person.planet_id());
                match planet_id {
                    Some(id) => vm.load_planet(&id),
                    None => println!("No result number {n}"),
                }
            }
            Command::Retry => {
                if matches!(vm.planet_state(), UiState::Error { .. }) {
                    vm.retry_planet("");
                } else {
                    vm.retry_search();
                }
            }
            Command::Clear => vm.clear_planet(),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Invalid(reason) => println!("{reason}\n{HELP}"),
        }
    }

    info!("Interactive session ended");
    drop(vm);
    for printer in printers {
        printer.abort();
    }
    Ok(())
}
