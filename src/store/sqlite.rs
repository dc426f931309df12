use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};

use crate::error::StoreError;
use crate::types::{JournalEntry, NewJournal, User};

type Result<T> = std::result::Result<T, StoreError>;

const JOURNAL_COLUMNS: &str = "id, user_id, title, mood, description, created_at";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        Self::with_connection(Connection::open(db_path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS journal (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES user(id),
                title TEXT NOT NULL,
                mood TEXT NOT NULL,
                description TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS journal_user_idx ON journal(user_id);
        ")?;

        Ok(Self { conn })
    }

    // ── Users ──

    pub fn create_user(&self, email: &str) -> Result<User> {
        let existing: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM user WHERE email = ?1",
                rusqlite::params![email],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            return Err(StoreError::Conflict("User already exists".into()));
        }

        self.conn.execute(
            "INSERT INTO user (email) VALUES (?1)",
            rusqlite::params![email],
        )?;
        Ok(User {
            id: self.conn.last_insert_rowid(),
            email: email.to_string(),
        })
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare("SELECT id, email FROM user ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                email: row.get(1)?,
            })
        })?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row?);
        }
        Ok(users)
    }

    // ── Journals ──

    pub fn create_journal(&self, journal: &NewJournal) -> Result<JournalEntry> {
        self.create_journal_at(journal, Utc::now())
    }

    pub fn create_journal_at(
        &self,
        journal: &NewJournal,
        created_at: DateTime<Utc>,
    ) -> Result<JournalEntry> {
        self.conn.execute(
            "INSERT INTO journal (user_id, title, mood, description, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                journal.user_id,
                journal.title,
                journal.mood,
                journal.description,
                created_at.timestamp(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        self.get_journal(id)?.ok_or(StoreError::NotFound(id))
    }

    /// All journals owned by `user_id`, oldest first by insertion.
    pub fn journals_for_user(&self, user_id: i64) -> Result<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM journal WHERE user_id = ?1 ORDER BY id",
            JOURNAL_COLUMNS
        ))?;
        let rows = stmt.query_map(rusqlite::params![user_id], row_to_journal)?;

        let mut journals = Vec::new();
        for row in rows {
            journals.push(row?);
        }
        Ok(journals)
    }

    pub fn get_journal(&self, id: i64) -> Result<Option<JournalEntry>> {
        let journal = self
            .conn
            .query_row(
                &format!("SELECT {} FROM journal WHERE id = ?1", JOURNAL_COLUMNS),
                rusqlite::params![id],
                row_to_journal,
            )
            .optional()?;
        Ok(journal)
    }

    /// Rewrite title, mood and description. `created_at` is left untouched.
    pub fn update_journal(&self, id: i64, journal: &NewJournal) -> Result<JournalEntry> {
        self.owned_journal(id, journal.user_id)?;
        self.conn.execute(
            "UPDATE journal SET title = ?1, mood = ?2, description = ?3 WHERE id = ?4",
            rusqlite::params![journal.title, journal.mood, journal.description, id],
        )?;
        self.get_journal(id)?.ok_or(StoreError::NotFound(id))
    }

    pub fn delete_journal(&self, id: i64, user_id: i64) -> Result<()> {
        self.owned_journal(id, user_id)?;
        self.conn.execute(
            "DELETE FROM journal WHERE id = ?1",
            rusqlite::params![id],
        )?;
        Ok(())
    }

    fn owned_journal(&self, id: i64, user_id: i64) -> Result<JournalEntry> {
        let existing = self.get_journal(id)?.ok_or(StoreError::NotFound(id))?;
        if existing.user_id != user_id {
            return Err(StoreError::Forbidden {
                journal_id: id,
                user_id,
            });
        }
        Ok(existing)
    }
}

fn row_to_journal(row: &rusqlite::Row<'_>) -> rusqlite::Result<JournalEntry> {
    Ok(JournalEntry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        mood: row.get(3)?,
        description: row.get(4)?,
        created_at: parse_ts(row.get(5)?),
    })
}

fn parse_ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_else(Utc::now)
}
