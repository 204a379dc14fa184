//! Add command for recording a new loan

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::cli::ledger_service;
use crate::data_paths::DataPaths;
use crate::ledger::display::format_amount;

#[derive(Args, Clone)]
pub struct AddArgs {
    /// Platform or person the loan is owed to
    pub platform: String,

    /// Loan amount
    pub amount: Decimal,

    /// Due date (YYYY-MM-DD)
    pub due_date: NaiveDate,

    /// Optional notes
    #[arg(long, default_value = "")]
    pub notes: String,
}

pub struct AddCommand {
    args: AddArgs,
}

impl AddCommand {
    pub fn new(args: AddArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        if self.args.platform.trim().is_empty() {
            bail!("Platform must not be empty");
        }

        let service = ledger_service(&data_paths).await?;
        let loan = service
            .add(
                self.args.platform.trim().to_string(),
                self.args.amount,
                self.args.due_date,
                self.args.notes.clone(),
            )
            .await?;

        println!(
            "{} {} owed to {} due {} (id {})",
            "Recorded".green().bold(),
            format_amount(loan.amount),
            loan.platform.bright_cyan(),
            loan.due_date,
            loan.id,
        );

        Ok(())
    }
}
