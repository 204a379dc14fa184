//! Remove command for deleting a loan record

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::info;

use crate::cli::ledger_service;
use crate::data_paths::DataPaths;
use crate::ledger::display::format_amount;

#[derive(Args, Clone)]
pub struct RemoveArgs {
    /// Id of the loan to delete
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

pub struct RemoveCommand {
    args: RemoveArgs,
}

impl RemoveCommand {
    pub fn new(args: RemoveArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let service = ledger_service(&data_paths).await?;

        let loan = service
            .get(self.args.id)
            .await
            .with_context(|| format!("Loan {} not found", self.args.id))?;

        if !self.args.force {
            print!(
                "Delete {} owed to {}? (y/N): ",
                format_amount(loan.amount),
                loan.platform,
            );

            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().to_lowercase().starts_with('y') {
                info!("Deletion cancelled.");
                return Ok(());
            }
        }

        let removed = service.remove(self.args.id).await?;

        println!(
            "{} loan {} ({}, {})",
            "Deleted".red().bold(),
            removed.id,
            removed.platform.bright_cyan(),
            format_amount(removed.amount),
        );

        Ok(())
    }
}
