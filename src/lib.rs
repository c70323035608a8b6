//! Holocron: search SWAPI characters and look up their homeworlds.
//!
//! The library is the fetch → map → state pipeline; `src/main.rs` is a thin
//! command-line front end over [`core::StarWarsViewModel`].

use clap::ValueEnum;

pub mod api;
pub mod cli;
pub mod core;
pub mod domain;

#[cfg(test)]
pub mod test_support;

/// How the CLI renders results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
