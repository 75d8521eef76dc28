mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deck_layout::DeckSettings;
use log::LevelFilter;
use std::path::{Path, PathBuf};

use crate::logger::CliLogger;

#[derive(Parser)]
#[command(name = "deckprint", about = "Lay out card images for double-sided printing", version)]
struct Cli {
    /// Show per-file and per-page details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate front/back PDFs from a deck directory
    Generate {
        /// Directory of card images
        #[arg(short, long, default_value = "deck-to-print")]
        deck: PathBuf,

        /// Settings file (JSON)
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// Directory for the generated PDFs
        #[arg(short, long, default_value = "results")]
        output: PathBuf,
    },

    /// Generate a two-page crosshair sheet to check front/back registration
    Calibrate {
        /// Settings file (JSON)
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// Directory for the generated PDF
        #[arg(short, long, default_value = "results")]
        output: PathBuf,
    },

    /// Count the printable cards in a deck directory
    Count {
        /// Directory of card images
        #[arg(short, long, default_value = "deck-to-print")]
        deck: PathBuf,
    },

    /// Write a settings file with every default value
    InitConfig {
        /// Settings file to create
        #[arg(short, long, default_value = "config.json")]
        output: PathBuf,
    },
}

async fn load_settings(path: &Path) -> Result<DeckSettings> {
    DeckSettings::load(path)
        .await
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CliLogger::new(level).init()?;

    match cli.command {
        Commands::Generate {
            deck,
            config,
            output,
        } => {
            let settings = load_settings(&config).await?;
            let written = deck_layout::generate_deck(&deck, &settings, &output).await?;
            for path in &written {
                println!("Generated → {}", path.display());
            }
        }

        Commands::Calibrate { config, output } => {
            let settings = load_settings(&config).await?;
            let path = deck_layout::generate_calibration(&settings, &output).await?;
            println!("Calibration page → {}", path.display());
        }

        Commands::Count { deck } => {
            let entries = deck_layout::read_deck_dir(&deck)
                .await
                .with_context(|| format!("Failed to read {}", deck.display()))?;
            println!("{}", deck_layout::count_cards(&entries));
        }

        Commands::InitConfig { output } => {
            DeckSettings::default().save(&output).await?;
            println!("Default settings → {}", output.display());
        }
    }

    Ok(())
}
