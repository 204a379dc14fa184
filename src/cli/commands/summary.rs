//! Summary command: totals and the per-platform breakdown

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::cli::ledger_service;
use crate::data_paths::DataPaths;
use crate::ledger::display::{breakdown_table, render_totals};
use crate::ledger::summary::{platform_breakdown, totals};

#[derive(Args, Clone)]
pub struct SummaryArgs {}

pub struct SummaryCommand {
    _args: SummaryArgs,
}

impl SummaryCommand {
    pub fn new(args: SummaryArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        let service = ledger_service(&data_paths).await?;
        let loans = service.list().await;

        if loans.is_empty() {
            println!("No utang records yet. Add your first loan with 'utang add'.");
            return Ok(());
        }

        println!("{}", render_totals(&totals(&loans)));
        println!();
        println!("{}", "Unpaid by platform".bold());
        println!("{}", breakdown_table(&platform_breakdown(&loans)));

        Ok(())
    }
}
