use clap::Parser;
use failure::Error;
use park_tickets::config::ParkConfig;
use park_tickets::console::Console;
use park_tickets::park::ParkSystem;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "park-tickets")]
#[command(about = "Amusement park ticket booking simulator")]
#[command(version)]
struct Cli {
    /// JSON file with rides and customers to start with
    #[arg(long)]
    config: Option<PathBuf>,
}

fn bootstrap_system(cli: &Cli) -> Result<ParkSystem, Error> {
    match &cli.config {
        Some(path) => Ok(ParkSystem::from_config(ParkConfig::load(path)?)),
        None => Ok(ParkSystem::new()),
    }
}

fn run_local(cli: Cli) -> Result<(), Error> {
    let mut system = bootstrap_system(&cli)?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut console = Console::new(stdin.lock(), stdout.lock());

    console.run(&mut system)
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(error) = run_local(Cli::parse()) {
        eprintln!("park-tickets: {}", error);
        process::exit(1);
    }
}
