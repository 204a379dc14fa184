//! CLI module for the utang tracker
//!
//! Uses clap for argument parsing and a structured command pattern for all
//! ledger operations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::ledger::{LedgerService, LedgerStorage};
use crate::logging::{init_logging, LoggingConfig};

use commands::add::{AddArgs, AddCommand};
use commands::edit::{EditArgs, EditCommand};
use commands::export::{ExportArgs, ExportCommand};
use commands::list::{ListArgs, ListCommand};
use commands::paid::{PaidArgs, PaidCommand};
use commands::remove::{RemoveArgs, RemoveCommand};
use commands::summary::{SummaryArgs, SummaryCommand};
use commands::version::{VersionArgs, VersionCommand};

#[derive(Parser)]
#[command(name = "utang")]
#[command(version)]
#[command(about = "CLI tracker for personal loans and debts (utang)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new loan
    Add(AddArgs),

    /// List loans with search, status filter, and sort
    List(ListArgs),

    /// Edit an existing loan
    Edit(EditArgs),

    /// Toggle a loan between paid and unpaid
    Paid(PaidArgs),

    /// Delete a loan record
    Remove(RemoveArgs),

    /// Show totals and the per-platform breakdown
    Summary(SummaryArgs),

    /// Export the ledger to CSV
    Export(ExportArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);

        // Ensure all directories exist
        data_paths.ensure_directories()?;

        init_logging(LoggingConfig::new(data_paths.clone(), self.verbose > 0))?;

        match self.command {
            Commands::Add(args) => AddCommand::new(args).execute(data_paths).await,
            Commands::List(args) => ListCommand::new(args).execute(data_paths).await,
            Commands::Edit(args) => EditCommand::new(args).execute(data_paths).await,
            Commands::Paid(args) => PaidCommand::new(args).execute(data_paths).await,
            Commands::Remove(args) => RemoveCommand::new(args).execute(data_paths).await,
            Commands::Summary(args) => SummaryCommand::new(args).execute(data_paths).await,
            Commands::Export(args) => ExportCommand::new(args).execute(data_paths).await,
            Commands::Version(args) => VersionCommand::new(args).execute(data_paths).await,
        }
    }
}

/// Build the ledger service rooted at the data directory
pub(crate) async fn ledger_service(data_paths: &DataPaths) -> Result<LedgerService> {
    let service = LedgerService::new(LedgerStorage::new(data_paths.ledger()));
    service.init().await?;
    Ok(service)
}
