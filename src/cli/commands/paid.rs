//! Paid command: toggle a loan between paid and unpaid

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;

use crate::cli::ledger_service;
use crate::data_paths::DataPaths;
use crate::ledger::display::format_amount;

#[derive(Args, Clone)]
pub struct PaidArgs {
    /// Id of the loan to toggle
    pub id: i64,
}

pub struct PaidCommand {
    args: PaidArgs,
}

impl PaidCommand {
    pub fn new(args: PaidArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let service = ledger_service(&data_paths).await?;

        let loan = service
            .toggle_paid(self.args.id)
            .await
            .with_context(|| format!("Loan {} not found", self.args.id))?;

        if loan.is_paid {
            println!(
                "{} {} to {} marked as paid",
                "Settled:".green().bold(),
                format_amount(loan.amount),
                loan.platform.bright_cyan(),
            );
        } else {
            println!(
                "{} {} to {} marked as unpaid",
                "Reopened:".yellow().bold(),
                format_amount(loan.amount),
                loan.platform.bright_cyan(),
            );
        }

        Ok(())
    }
}
