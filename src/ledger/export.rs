//! CSV export of the loan list
//!
//! Matches the historical export format: fixed header, `Paid`/`Unpaid`
//! status strings, fields written raw. A comma or quote inside a platform
//! name or note will corrupt its row; that limitation is accepted.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::ledger::types::Loan;

/// Default export file name
pub const DEFAULT_EXPORT_FILE: &str = "utang_data.csv";

/// CSV header row
const CSV_HEADER: &str = "Platform,Amount,Due Date,Status,Notes";

/// Render the loan list as CSV text
pub fn render_csv(loans: &[Loan]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for loan in loans {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            loan.platform,
            loan.amount,
            loan.due_date,
            if loan.is_paid { "Paid" } else { "Unpaid" },
            loan.notes,
        ));
    }

    out
}

/// Write the loan list to a CSV file
pub fn export_csv(path: &Path, loans: &[Loan]) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file {:?}", path))?;

    file.write_all(render_csv(loans).as_bytes())
        .context("Failed to write export file")?;

    info!("Exported {} loans to {:?}", loans.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn sample_loans() -> Vec<Loan> {
        vec![
            Loan {
                id: 1,
                platform: "BankX".to_string(),
                amount: dec!(1500.50),
                due_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                notes: "monthly installment".to_string(),
                date_added: Utc::now(),
                is_paid: false,
            },
            Loan {
                id: 2,
                platform: "GCash".to_string(),
                amount: dec!(200),
                due_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
                notes: String::new(),
                date_added: Utc::now(),
                is_paid: true,
            },
        ]
    }

    #[test]
    fn test_render_csv() {
        let csv = render_csv(&sample_loans());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Platform,Amount,Due Date,Status,Notes");
        assert_eq!(lines[1], "BankX,1500.50,2024-07-01,Unpaid,monthly installment");
        assert_eq!(lines[2], "GCash,200,2024-06-12,Paid,");
    }

    #[test]
    fn test_render_csv_empty_list() {
        let csv = render_csv(&[]);
        assert_eq!(csv, "Platform,Amount,Due Date,Status,Notes\n");
    }

    #[test]
    fn test_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_EXPORT_FILE);

        export_csv(&path, &sample_loans()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_csv(&sample_loans()));
    }
}
