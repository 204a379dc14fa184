//! Storage layer for the utang ledger
//!
//! The whole loan list lives in a single JSON file (`loans.json`) and every
//! save replaces it wholesale. Last writer wins; there is no merge and no
//! partial update.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::ledger::types::Loan;

/// Number of timestamped backups kept alongside the ledger file
const BACKUP_KEEP_COUNT: usize = 10;

/// Ledger storage errors
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Loan not found: {0}")]
    LoanNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// File-backed repository for the loan list
pub struct LedgerStorage {
    /// Base directory for ledger data
    base_dir: PathBuf,

    /// Ledger file path
    ledger_path: PathBuf,

    /// Backup directory
    backup_dir: PathBuf,
}

impl LedgerStorage {
    /// Create new storage manager
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let ledger_path = base_dir.join("loans.json");
        let backup_dir = base_dir.join("backups");

        Self {
            base_dir,
            ledger_path,
            backup_dir,
        }
    }

    /// Initialize storage directories
    pub async fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .context("Failed to create ledger directory")?;

        fs::create_dir_all(&self.backup_dir)
            .await
            .context("Failed to create backup directory")?;

        debug!("Initialized ledger storage at: {:?}", self.base_dir);
        Ok(())
    }

    /// Path of the ledger file
    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    /// Load the full loan list from disk
    ///
    /// Fails open: a missing file, an unreadable file, or malformed JSON all
    /// yield an empty list. The condition is logged but never surfaced.
    pub async fn load_all(&self) -> Vec<Loan> {
        if !self.ledger_path.exists() {
            debug!("No ledger file found, starting with an empty list");
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.ledger_path).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read ledger file, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Loan>>(&content) {
            Ok(loans) => {
                debug!("Loaded ledger with {} loans", loans.len());
                loans
            }
            Err(e) => {
                warn!("Ledger file is malformed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the persisted loan list wholesale
    ///
    /// Writes to a temporary file and renames it into place, so a failed
    /// write leaves the previous ledger intact.
    pub async fn save_all(&self, loans: &[Loan]) -> Result<()> {
        if self.ledger_path.exists() {
            self.create_backup().await?;
        }

        let json = serde_json::to_string_pretty(loans).context("Failed to serialize ledger")?;

        let temp_path = self.ledger_path.with_extension("tmp");
        fs::write(&temp_path, json)
            .await
            .context("Failed to write temporary ledger file")?;

        fs::rename(&temp_path, &self.ledger_path)
            .await
            .context("Failed to rename ledger file")?;

        debug!("Saved ledger with {} loans", loans.len());
        Ok(())
    }

    /// Find a loan by id (linear scan over the loaded list)
    pub async fn get_by_id(&self, id: i64) -> Result<Loan> {
        self.load_all()
            .await
            .into_iter()
            .find(|loan| loan.id == id)
            .ok_or_else(|| LedgerError::LoanNotFound(id).into())
    }

    /// Create backup of the current ledger file
    async fn create_backup(&self) -> Result<()> {
        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%3f");
        let backup_path = self.backup_dir.join(format!("loans_{}.json", timestamp));

        fs::copy(&self.ledger_path, &backup_path)
            .await
            .context("Failed to create backup")?;

        debug!("Created backup at: {:?}", backup_path);

        self.clean_old_backups(BACKUP_KEEP_COUNT).await?;

        Ok(())
    }

    /// Clean old backup files, keeping the newest `keep_count`
    async fn clean_old_backups(&self, keep_count: usize) -> Result<()> {
        let mut entries = fs::read_dir(&self.backup_dir).await?;
        let mut backups = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Ok(metadata) = entry.metadata().await {
                    if let Ok(modified) = metadata.modified() {
                        backups.push((path, modified));
                    }
                }
            }
        }

        // Sort by modification time, newest first
        backups.sort_by_key(|(_, time)| std::cmp::Reverse(*time));

        for (path, _) in backups.into_iter().skip(keep_count) {
            if let Err(e) = fs::remove_file(&path).await {
                warn!("Failed to remove old backup {:?}: {}", path, e);
            } else {
                debug!("Removed old backup: {:?}", path);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn loan(id: i64, platform: &str, amount: rust_decimal::Decimal) -> Loan {
        Loan {
            id,
            platform: platform.to_string(),
            amount,
            due_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            notes: String::new(),
            date_added: Utc::now(),
            is_paid: false,
        }
    }

    #[tokio::test]
    async fn test_load_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LedgerStorage::new(temp_dir.path());
        storage.init().await.unwrap();

        let loans = vec![
            loan(1, "BankX", dec!(1500.50)),
            loan(2, "GCash", dec!(200.00)),
        ];

        storage.save_all(&loans).await.unwrap();
        let loaded = storage.load_all().await;
        assert_eq!(loaded, loans);

        // Saving the loaded list back is idempotent
        storage.save_all(&loaded).await.unwrap();
        assert_eq!(storage.load_all().await, loans);
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LedgerStorage::new(temp_dir.path());
        storage.init().await.unwrap();

        assert!(storage.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LedgerStorage::new(temp_dir.path());
        storage.init().await.unwrap();

        fs::write(storage.ledger_path(), "{not json")
            .await
            .unwrap();
        assert!(storage.load_all().await.is_empty());

        // Not an array either
        fs::write(storage.ledger_path(), "{\"loans\": 1}")
            .await
            .unwrap();
        assert!(storage.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LedgerStorage::new(temp_dir.path());
        storage.init().await.unwrap();

        let loans = vec![loan(7, "BankX", dec!(100)), loan(8, "GCash", dec!(50))];
        storage.save_all(&loans).await.unwrap();

        let found = storage.get_by_id(8).await.unwrap();
        assert_eq!(found.platform, "GCash");

        let missing = storage.get_by_id(99).await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_save_creates_backup() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LedgerStorage::new(temp_dir.path());
        storage.init().await.unwrap();

        storage.save_all(&[loan(1, "BankX", dec!(10))]).await.unwrap();
        storage.save_all(&[loan(1, "BankX", dec!(20))]).await.unwrap();

        let mut entries = fs::read_dir(temp_dir.path().join("backups")).await.unwrap();
        let mut count = 0;
        while let Some(_) = entries.next_entry().await.unwrap() {
            count += 1;
        }
        assert_eq!(count, 1);
    }
}
