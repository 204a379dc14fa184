//! List command: dashboard totals, upcoming payments, and the loan table

use anyhow::Result;
use chrono::Local;
use clap::Args;

use crate::cli::ledger_service;
use crate::data_paths::DataPaths;
use crate::ledger::display::{loan_table, render_totals, render_upcoming};
use crate::ledger::summary::{apply_query, totals, upcoming_payments};
use crate::ledger::types::{LoanQuery, SortOrder, StatusFilter};

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Search term matched against platform or notes (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by paid state: all, unpaid, or paid
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Sort order: amount (high to low) or due-date (soonest first)
    #[arg(long)]
    pub sort: Option<SortOrder>,
}

pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let service = ledger_service(&data_paths).await?;
        let loans = service.list().await;

        if loans.is_empty() {
            println!("No utang records yet. Add your first loan with 'utang add'.");
            return Ok(());
        }

        let today = Local::now().date_naive();

        println!("{}", render_totals(&totals(&loans)));
        println!();

        let upcoming = upcoming_payments(&loans, today);
        if !upcoming.is_empty() {
            println!("{}", render_upcoming(&upcoming));
        }

        let query = LoanQuery {
            search: self.args.search.clone(),
            status: self.args.status,
            sort: self.args.sort,
        };
        let filtered = apply_query(&loans, &query);

        if filtered.is_empty() {
            println!("No loans match the current filters.");
        } else {
            println!("{}", loan_table(&filtered, today));
        }

        Ok(())
    }
}
