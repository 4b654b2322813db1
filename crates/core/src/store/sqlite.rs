use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};

use super::{CollectionKind, CollectionStore, StoreError, WordStore};

/// SQLite-backed word and collection store
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Create a new SQLite store, creating the database file and tables if needed
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite store (useful for testing)
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS words (
                position INTEGER PRIMARY KEY,
                word TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS collection_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                collection TEXT NOT NULL,
                payload TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_collection_items_collection
                ON collection_items(collection, id);
            "#,
        )
        .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Database("connection mutex poisoned".to_string()))
    }

    fn count(conn: &Connection, kind: CollectionKind) -> Result<i64, StoreError> {
        conn.query_row(
            "SELECT COUNT(*) FROM collection_items WHERE collection = ?",
            params![kind.as_str()],
            |row| row.get(0),
        )
        .map_err(|e| StoreError::Database(e.to_string()))
    }
}

impl WordStore for SqliteStore {
    fn get_words(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT word FROM words ORDER BY position")
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let words = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(words)
    }

    fn set_words(&self, words: &[String]) -> Result<(), StoreError> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tx.execute("DELETE FROM words", [])
            .map_err(|e| StoreError::Database(e.to_string()))?;
        {
            let mut stmt = tx
                .prepare("INSERT INTO words (position, word) VALUES (?, ?)")
                .map_err(|e| StoreError::Database(e.to_string()))?;
            for (position, word) in words.iter().enumerate() {
                stmt.execute(params![position as i64, word])
                    .map_err(|e| StoreError::Database(e.to_string()))?;
            }
        }

        tx.commit().map_err(|e| StoreError::Database(e.to_string()))
    }
}

impl CollectionStore for SqliteStore {
    fn append_upcoming(&self, item: &str) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO collection_items (collection, payload) VALUES (?, ?)",
            params![CollectionKind::Upcoming.as_str(), item],
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    fn clear_upcoming(&self) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "DELETE FROM collection_items WHERE collection = ?",
            params![CollectionKind::Upcoming.as_str()],
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    fn rotate_collections(&self) -> Result<(), StoreError> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if Self::count(&tx, CollectionKind::Upcoming)? == 0 {
            return Err(StoreError::NothingToRotate);
        }

        // On a first run there is no "recent" yet and "prev" stays as it is
        if Self::count(&tx, CollectionKind::Recent)? > 0 {
            tx.execute(
                "DELETE FROM collection_items WHERE collection = ?",
                params![CollectionKind::Prev.as_str()],
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;
            tx.execute(
                "UPDATE collection_items SET collection = ? WHERE collection = ?",
                params![CollectionKind::Prev.as_str(), CollectionKind::Recent.as_str()],
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;
        }

        tx.execute(
            "UPDATE collection_items SET collection = ? WHERE collection = ?",
            params![
                CollectionKind::Recent.as_str(),
                CollectionKind::Upcoming.as_str()
            ],
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;

        tx.commit().map_err(|e| StoreError::Database(e.to_string()))
    }

    fn members(&self, kind: CollectionKind) -> Result<Vec<String>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT payload FROM collection_items WHERE collection = ? ORDER BY id")
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let items = stmt
            .query_map(params![kind.as_str()], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(items)
    }
}
