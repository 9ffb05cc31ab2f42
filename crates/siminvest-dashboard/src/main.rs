//! SimInvest regional investment monitoring dashboard
//!
//! Aggregates per-regency realized-investment records and presents summary
//! statistics, matrices and CSV reports, with optional cloud persistence
//! and AI-generated narrative analysis.

mod analysis;
mod cloud;
mod config;
mod constants;
mod controller;
mod import;
mod render;
mod reports;
mod seed;
mod session;
mod store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use siminvest_engine::Sector;

use config::FileConfig;
use controller::Dashboard;
use store::Store;

/// Default config file path
const CONFIG_FILE: &str = "config.toml";

/// Load config file or exit with helpful message
fn load_config_file() -> Result<FileConfig> {
    let path = std::path::Path::new(CONFIG_FILE);

    if !path.exists() {
        anyhow::bail!(
            "Config file '{}' not found.\n\n\
            To get started:\n\
            1. Copy config.toml.example to config.toml\n\
            2. Fill in the dashboard credentials (and optional cloud/AI keys)\n\n\
            See config.toml.example for the required format.",
            CONFIG_FILE
        );
    }

    FileConfig::load(path)
}

#[derive(Parser, Debug)]
#[command(name = "siminvest-dashboard")]
#[command(about = "Monitoring realisasi investasi per kabupaten/kota")]
struct Args {
    /// Data directory for the snapshot database and session
    #[arg(short, long, default_value = "./data", global = true)]
    data_dir: PathBuf,

    /// Output directory for generated CSV reports
    #[arg(short, long, default_value = "./output", global = true)]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Province-wide summary (default view)
    Dashboard,

    /// Quarterly realization view
    Quarterly,

    /// Sector composition view
    Sectors {
        /// Sector key to focus (esdm, pariwisata, pertanian, ...)
        #[arg(long, default_value = "esdm")]
        focus: String,
    },

    /// PMA/PMDN capital source view
    Capital,

    /// Single-region profile
    Regency {
        /// Record id (defaults to the first region)
        #[arg(long)]
        id: Option<String>,
    },

    /// Replace the dataset from a JSON export
    Import {
        /// Path to the JSON array of regency records
        file: PathBuf,
    },

    /// Export the dataset as JSON
    Export {
        /// Destination path
        file: PathBuf,
    },

    /// Restore the bundled seed dataset
    Reset,

    /// Generate the CSV report set
    Reports,

    /// Cloud persistence
    Sync {
        #[command(subcommand)]
        action: SyncCommand,
    },

    /// AI narrative analysis of the current dataset
    Analyze,

    /// Start a dashboard session
    Login { username: String, password: String },

    /// End the dashboard session
    Logout,
}

#[derive(Subcommand, Debug)]
enum SyncCommand {
    /// Fetch the cloud collection and replace the local snapshot
    Pull,
    /// Replace the cloud collection with the local snapshot
    Push,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = Args::parse();
    let config = load_config_file()?;
    let command = args.command.take().unwrap_or(Command::Dashboard);

    // Session commands work without an active session
    match &command {
        Command::Login { username, password } => {
            let session = session::login(&args.data_dir, &config.auth, username, password)?;
            println!("Sesi aktif untuk {}", session.username);
            return Ok(());
        }
        Command::Logout => {
            session::logout(&args.data_dir)?;
            println!("Sesi diakhiri.");
            return Ok(());
        }
        _ => {
            session::require_session(&args.data_dir)?;
        }
    }

    let store = Store::open(&args.data_dir.join(constants::SNAPSHOT_FILENAME)).await?;
    let mut dashboard = match store.load().await? {
        Some(records) => Dashboard::with_records(records),
        None => Dashboard::with_seed(),
    };

    match command {
        Command::Dashboard => {
            render::print_dashboard(
                dashboard.records(),
                &config.dashboard.province,
                config.dashboard.year,
                dashboard.is_custom(),
            );
        }

        Command::Quarterly => {
            render::print_quarterly(dashboard.records());
        }

        Command::Sectors { focus } => {
            let sector = Sector::from_key(&focus)
                .with_context(|| format!("Unknown sector key: {}", focus))?;
            render::print_sectors(dashboard.records(), sector);
        }

        Command::Capital => {
            render::print_capital(dashboard.records());
        }

        Command::Regency { id } => {
            let record = dashboard
                .selected(id.as_deref())
                .context("Dataset is empty; import or reset first")?;
            render::print_regency(record, config.dashboard.year);
        }

        Command::Import { file } => {
            // Parse fully before touching the snapshot
            let records = import::import_from_file(&file)?;
            let count = records.len();
            dashboard.replace(records);
            store.save(dashboard.records()).await?;
            println!("Imported {} records from {}", count, file.display());
        }

        Command::Export { file } => {
            import::export_to_file(dashboard.records(), &file)?;
            println!(
                "Exported {} records to {}",
                dashboard.records().len(),
                file.display()
            );
        }

        Command::Reset => {
            dashboard.reset();
            store.save(dashboard.records()).await?;
            println!("Dataset dikembalikan ke data awal.");
        }

        Command::Reports => {
            reports::generate_all_reports(&args.output_dir, dashboard.records())?;
        }

        Command::Sync { action } => match action {
            SyncCommand::Pull => {
                let records = cloud::fetch_records(config.cloud()?).await?;
                let count = records.len();
                dashboard.replace(records);
                store.save(dashboard.records()).await?;
                println!("Pulled {} records from cloud", count);
            }
            SyncCommand::Push => {
                cloud::push_records(config.cloud()?, dashboard.records()).await?;
                println!("Pushed {} records to cloud", dashboard.records().len());
            }
        },

        Command::Analyze => {
            let text = analysis::request_analysis(
                config.ai()?,
                dashboard.records(),
                &config.dashboard.province,
                config.dashboard.year,
            )
            .await?;
            println!("\n=== ANALISIS EKONOMI AI ===\n");
            println!("{}", text);
        }

        Command::Login { .. } | Command::Logout => unreachable!("handled above"),
    }

    Ok(())
}
