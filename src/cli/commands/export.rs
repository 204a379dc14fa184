//! Export command: write the ledger to a CSV file

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use crate::cli::ledger_service;
use crate::data_paths::DataPaths;
use crate::ledger::export::{export_csv, DEFAULT_EXPORT_FILE};

#[derive(Args, Clone)]
pub struct ExportArgs {
    /// Output file path
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    pub output: PathBuf,
}

pub struct ExportCommand {
    args: ExportArgs,
}

impl ExportCommand {
    pub fn new(args: ExportArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let service = ledger_service(&data_paths).await?;
        let loans = service.list().await;

        export_csv(&self.args.output, &loans)?;

        println!(
            "{} {} loans to {}",
            "Exported".green().bold(),
            loans.len(),
            self.args.output.display(),
        );

        Ok(())
    }
}
