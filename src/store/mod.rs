pub mod sqlite;

use std::path::Path;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::types::{JournalEntry, NewJournal, User};

/// Read access to persisted journals, the only thing the summary pipeline needs.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Every entry for `user_id`, ascending by creation.
    async fn entries_for_user(&self, user_id: i64) -> Result<Vec<JournalEntry>, StoreError>;
}

pub struct Store {
    db: Mutex<sqlite::SqliteStore>,
}

impl Store {
    pub fn init(db_path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let db = sqlite::SqliteStore::open(db_path)?;
        tracing::info!(path = %db_path.display(), "journal database opened");
        Ok(Self { db: Mutex::new(db) })
    }

    #[cfg(test)]
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            db: Mutex::new(sqlite::SqliteStore::open_in_memory()?),
        })
    }

    pub async fn create_user(&self, email: &str) -> Result<User, StoreError> {
        self.db.lock().await.create_user(email)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.db.lock().await.list_users()
    }

    pub async fn create_journal(&self, journal: &NewJournal) -> Result<JournalEntry, StoreError> {
        self.db.lock().await.create_journal(journal)
    }

    pub async fn journals_for_user(&self, user_id: i64) -> Result<Vec<JournalEntry>, StoreError> {
        self.db.lock().await.journals_for_user(user_id)
    }

    pub async fn update_journal(
        &self,
        id: i64,
        journal: &NewJournal,
    ) -> Result<JournalEntry, StoreError> {
        self.db.lock().await.update_journal(id, journal)
    }

    pub async fn delete_journal(&self, id: i64, user_id: i64) -> Result<(), StoreError> {
        self.db.lock().await.delete_journal(id, user_id)
    }
}

#[async_trait]
impl JournalStore for Store {
    async fn entries_for_user(&self, user_id: i64) -> Result<Vec<JournalEntry>, StoreError> {
        self.journals_for_user(user_id).await
    }
}
