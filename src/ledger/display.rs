//! Terminal rendering for ledger views
//!
//! Formatting only; all numbers come precomputed from the summary module.

use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::ledger::summary::{due_status, PlatformShare, Totals};
use crate::ledger::types::{DueStatus, Loan};

/// Format an amount in pesos with two decimal places
pub fn format_amount(amount: Decimal) -> String {
    format!("₱{:.2}", amount)
}

/// Dashboard header: total / unpaid / paid
pub fn render_totals(totals: &Totals) -> String {
    format!(
        "{} {}   {} {}   {} {}",
        "Total:".bold(),
        format_amount(totals.total),
        "Unpaid:".bold(),
        format_amount(totals.unpaid).red(),
        "Paid:".bold(),
        format_amount(totals.paid).green(),
    )
}

/// Main loan table
pub fn loan_table(loans: &[&Loan], today: NaiveDate) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Platform", "Amount", "Due Date", "Status", "Notes"]);

    for loan in loans {
        let due_cell = match (loan.is_paid, due_status(loan.due_date, today)) {
            (false, DueStatus::Overdue) => {
                Cell::new(format!("{} (overdue)", loan.due_date)).fg(Color::Red)
            }
            (false, DueStatus::Upcoming) => {
                Cell::new(format!("{} (due soon)", loan.due_date)).fg(Color::Yellow)
            }
            _ => Cell::new(loan.due_date.to_string()),
        };

        let status_cell = if loan.is_paid {
            Cell::new("Paid").fg(Color::Green)
        } else {
            Cell::new("Unpaid").fg(Color::Yellow)
        };

        table.add_row(vec![
            Cell::new(loan.id.to_string()),
            Cell::new(&loan.platform),
            Cell::new(format_amount(loan.amount)),
            due_cell,
            status_cell,
            Cell::new(&loan.notes),
        ]);
    }

    table
}

/// Per-platform breakdown of unpaid loans, with a 100% total footer
pub fn breakdown_table(shares: &[PlatformShare]) -> String {
    if shares.is_empty() {
        return "No unpaid loans".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Platform", "Amount", "Percentage"]);

    for share in shares {
        table.add_row(vec![
            Cell::new(&share.platform),
            Cell::new(format_amount(share.amount)),
            Cell::new(format!("{:.1}%", share.percentage)),
        ]);
    }

    let total: Decimal = shares.iter().map(|s| s.amount).sum();
    table.add_row(vec![
        Cell::new("Total").fg(Color::Cyan),
        Cell::new(format_amount(total)).fg(Color::Cyan),
        Cell::new("100%").fg(Color::Cyan),
    ]);

    table.to_string()
}

/// Upcoming-payments panel (unpaid, due within a week)
pub fn render_upcoming(upcoming: &[&Loan]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Upcoming Payments".bold().yellow()));

    for loan in upcoming {
        out.push_str(&format!(
            "  {}  due {}  {}\n",
            loan.platform,
            loan.due_date,
            format_amount(loan.amount),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(dec!(1500.5)), "₱1500.50");
        assert_eq!(format_amount(dec!(0)), "₱0.00");
        assert_eq!(format_amount(dec!(200)), "₱200.00");
    }

    #[test]
    fn test_breakdown_empty_state() {
        assert_eq!(breakdown_table(&[]), "No unpaid loans");
    }

    #[test]
    fn test_loan_table_marks_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let loan = Loan {
            id: 1,
            platform: "BankX".to_string(),
            amount: dec!(100),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
            notes: String::new(),
            date_added: Utc::now(),
            is_paid: false,
        };

        let rendered = loan_table(&[&loan], today).to_string();
        assert!(rendered.contains("overdue"));
        assert!(rendered.contains("Unpaid"));
    }
}
