//! Ledger service layer
//!
//! Mutation flows over [`LedgerStorage`]. Every mutation loads the full
//! list, edits a working copy, and persists the whole list back; the
//! atomic rename in the storage layer means a failed save leaves the
//! previous ledger untouched.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::info;

use crate::ledger::storage::{LedgerError, LedgerStorage};
use crate::ledger::types::Loan;

/// High-level operations on the utang ledger
pub struct LedgerService {
    storage: LedgerStorage,
}

impl LedgerService {
    pub fn new(storage: LedgerStorage) -> Self {
        Self { storage }
    }

    /// Initialize backing storage
    pub async fn init(&self) -> Result<()> {
        self.storage.init().await
    }

    /// All loans in stored order
    pub async fn list(&self) -> Vec<Loan> {
        self.storage.load_all().await
    }

    /// Look up a single loan by id
    pub async fn get(&self, id: i64) -> Result<Loan> {
        self.storage.get_by_id(id).await
    }

    /// Record a new loan
    ///
    /// Assigns the id and creation timestamp; new loans start unpaid.
    pub async fn add(
        &self,
        platform: String,
        amount: Decimal,
        due_date: NaiveDate,
        notes: String,
    ) -> Result<Loan> {
        let mut loans = self.storage.load_all().await;

        let loan = Loan {
            id: next_id(&loans),
            platform,
            amount,
            due_date,
            notes,
            date_added: Utc::now(),
            is_paid: false,
        };

        loans.push(loan.clone());
        self.storage.save_all(&loans).await?;

        info!(id = loan.id, platform = %loan.platform, "Added loan");
        Ok(loan)
    }

    /// Edit an existing loan
    ///
    /// All fields except id and creation timestamp are replaced.
    pub async fn update(
        &self,
        id: i64,
        platform: String,
        amount: Decimal,
        due_date: NaiveDate,
        notes: String,
    ) -> Result<Loan> {
        let mut loans = self.storage.load_all().await;

        let loan = loans
            .iter_mut()
            .find(|loan| loan.id == id)
            .ok_or(LedgerError::LoanNotFound(id))?;

        loan.platform = platform;
        loan.amount = amount;
        loan.due_date = due_date;
        loan.notes = notes;
        let updated = loan.clone();

        self.storage.save_all(&loans).await?;

        info!(id, "Updated loan");
        Ok(updated)
    }

    /// Flip a loan between paid and unpaid
    pub async fn toggle_paid(&self, id: i64) -> Result<Loan> {
        let mut loans = self.storage.load_all().await;

        let loan = loans
            .iter_mut()
            .find(|loan| loan.id == id)
            .ok_or(LedgerError::LoanNotFound(id))?;

        loan.is_paid = !loan.is_paid;
        let updated = loan.clone();

        self.storage.save_all(&loans).await?;

        info!(id, is_paid = updated.is_paid, "Toggled loan");
        Ok(updated)
    }

    /// Delete a loan, returning the removed record
    pub async fn remove(&self, id: i64) -> Result<Loan> {
        let mut loans = self.storage.load_all().await;

        let index = loans
            .iter()
            .position(|loan| loan.id == id)
            .ok_or(LedgerError::LoanNotFound(id))?;

        let removed = loans.remove(index);
        self.storage.save_all(&loans).await?;

        info!(id, platform = %removed.platform, "Removed loan");
        Ok(removed)
    }
}

/// Next free loan id
///
/// Ids come from the current Unix time in milliseconds; on a collision
/// (two creations within the same millisecond, or a clock step backwards)
/// the candidate is bumped until unique.
fn next_id(loans: &[Loan]) -> i64 {
    let mut id = Utc::now().timestamp_millis();
    while loans.iter().any(|loan| loan.id == id) {
        id += 1;
    }
    id
}
