use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use holocron::OutputFormat;
use holocron::cli;
use holocron::core::config::{self, CliOverrides};
use holocron::core::{StarWarsRepository, StarWarsViewModel};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "holocron", about = "Search Star Wars characters and their homeworlds")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// SWAPI base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Connect and request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Log level written to the log file (error, warn, info, debug, trace, off)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value_t, value_enum)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Command {
    /// Search characters by name
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Show a planet by id
    Planet { id: String },
    /// Interactive session (default)
    Interactive,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    let overrides = CliOverrides {
        base_url: args.base_url.as_deref(),
        timeout_secs: args.timeout_secs,
        log_level: args.log_level.as_deref(),
    };
    let resolved = config::resolve(&file_config, &overrides);

    // File logger; stdout belongs to the command output
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = resolved.log_level.parse().unwrap_or(LevelFilter::Debug);
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Holocron starting up against {}", resolved.base_url);
    if let Some(path) = config::config_path() {
        log::debug!("Config path: {}", path.display());
    }

    let repository = match StarWarsRepository::from_config(&resolved) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            return ExitCode::from(2);
        }
    };
    let mut vm = StarWarsViewModel::new(Arc::new(repository), tokio::runtime::Handle::current());

    let ok = match args.command.unwrap_or(Command::Interactive) {
        Command::Search { query } => cli::run_search(&mut vm, &query.join(" "), args.format).await,
        Command::Planet { id } => cli::run_planet(&mut vm, &id, args.format).await,
        Command::Interactive => match cli::run_interactive(vm, args.format).await {
            Ok(()) => true,
            Err(e) => {
                eprintln!("{e}");
                false
            }
        },
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
