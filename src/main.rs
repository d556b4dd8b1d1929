//! Menagerie CLI
//!
//! Small driver for the animal registry.
//!
//! # Usage
//!
//! ```bash
//! # Describe a classification tag
//! menagerie describe cat
//!
//! # Register Rex and Whiskers, feed everyone, print the registry
//! menagerie demo --food kibble --json
//! ```

use std::sync::Arc;

use clap::{Parser, Subcommand};
use menagerie::{
    new_shared_service, AnimalType, Cat, Dog, FeedPolicy, ServiceConfig, TracingLog,
};

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Application name
pub const APP_NAME: &str = "menagerie";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Food used by the demo when none is given
pub const DEMO_FOOD_DEFAULT: &str = "food";

// =============================================================================
// CLI
// =============================================================================

/// Menagerie - in-memory animal registry
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(about = "In-memory animal registry with feeding and classification")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the description of an animal type
    Describe {
        /// dog, cat, bird or fish
        kind: String,
    },
    /// Register a dog and a cat, then feed everyone
    Demo {
        /// Food handed to every hungry animal
        #[arg(long, default_value = DEMO_FOOD_DEFAULT)]
        food: String,

        /// Keep feeding after a failed feed instead of aborting
        #[arg(long)]
        continue_on_error: bool,

        /// Print the registry as JSON afterwards
        #[arg(long)]
        json: bool,
    },
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .init();

    tracing::debug!("Menagerie v{}", APP_VERSION);

    match cli.command {
        Commands::Describe { kind } => {
            let kind = AnimalType::from_str(&kind)
                .ok_or_else(|| anyhow::anyhow!("unknown animal type: {}", kind))?;
            println!("{}: {}", kind, kind.description());
        }
        Commands::Demo {
            food,
            continue_on_error,
            json,
        } => {
            let feed_policy = if continue_on_error {
                FeedPolicy::ContinueOnError
            } else {
                FeedPolicy::AbortOnError
            };
            let log = Arc::new(TracingLog);
            let service = new_shared_service(ServiceConfig { feed_policy }, log.clone());

            let mut registry = service.write().await;

            let mut rex = Dog::new("Rex", 3, "Labrador");
            rex.learn_trick("sit", &*log);
            registry.register_animal(rex);
            registry.register_animal(Cat::new("Whiskers", 2, true));

            let report = registry.feed_all(&food)?;
            println!(
                "fed: {} | skipped: {} | failed: {}",
                report.fed.join(", "),
                report.skipped.join(", "),
                report.failures.len()
            );

            for kind in AnimalType::all() {
                println!(
                    "{:>5}: {}",
                    kind.as_str(),
                    registry.get_animals_by_type(*kind).len()
                );
            }

            if json {
                println!("{}", registry.snapshot().to_json()?);
            }
        }
    }

    Ok(())
}
