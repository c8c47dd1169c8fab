use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use abook::commands::{dispatch, is_mutating, parse_input};
use abook::config::Config;
use abook::storage::DataManager;

#[derive(Parser)]
#[command(name = "abook")]
#[command(version)]
#[command(about = "Personal assistant for contacts and notes", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Path to the data file (overrides config)
    #[arg(long)]
    data_file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "abook=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config)?;
    let data_path = cli.data_file.unwrap_or(config.data_path.value);

    let mut manager = DataManager::load(&data_path);

    println!("Welcome to the assistant bot! Type 'help' for commands.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let (verb, args) = parse_input(&line);
        if verb == "close" || verb == "exit" {
            break;
        }

        let output = dispatch(&verb, &args, &mut manager);
        if !output.is_empty() {
            println!("{}", output);
        }

        // Eager save: a crash mid-session loses nothing. A failed save
        // is reported but never ends the loop.
        if is_mutating(&verb) {
            if let Err(e) = manager.save(&data_path) {
                warn!(error = %e, "save failed");
                println!("Warning: could not save data: {}", e);
            }
        }
    }

    if let Err(e) = manager.save(&data_path) {
        println!("Warning: could not save data: {}", e);
    }
    println!("Good bye!");
    Ok(())
}
