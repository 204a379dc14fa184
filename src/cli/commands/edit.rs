//! Edit command for updating an existing loan

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::cli::ledger_service;
use crate::data_paths::DataPaths;

#[derive(Args, Clone)]
pub struct EditArgs {
    /// Id of the loan to edit
    pub id: i64,

    /// New platform/person
    #[arg(long)]
    pub platform: Option<String>,

    /// New amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    pub due_date: Option<NaiveDate>,

    /// New notes
    #[arg(long)]
    pub notes: Option<String>,
}

pub struct EditCommand {
    args: EditArgs,
}

impl EditCommand {
    pub fn new(args: EditArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let service = ledger_service(&data_paths).await?;

        let current = service.get(self.args.id).await.with_context(|| {
            format!(
                "Loan {} not found. Run 'utang list' to see current records",
                self.args.id
            )
        })?;

        // Unset flags keep the stored value
        let platform = self
            .args
            .platform
            .clone()
            .unwrap_or_else(|| current.platform.clone());
        if platform.trim().is_empty() {
            bail!("Platform must not be empty");
        }

        let updated = service
            .update(
                self.args.id,
                platform.trim().to_string(),
                self.args.amount.unwrap_or(current.amount),
                self.args.due_date.unwrap_or(current.due_date),
                self.args.notes.clone().unwrap_or_else(|| current.notes.clone()),
            )
            .await?;

        println!(
            "{} loan {} ({})",
            "Updated".green().bold(),
            updated.id,
            updated.platform.bright_cyan(),
        );

        Ok(())
    }
}
