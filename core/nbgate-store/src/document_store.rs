use crate::{StorageError, StorageResult};
use duckdb::{params, Connection};
use nbgate_model::Document;
use nbgate_types::{DocumentId, Requester};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Persistent store for saved documents backed by DuckDB.
pub struct DocumentStore {
    conn: Mutex<Connection>,
}

impl DocumentStore {
    /// Opens (or creates) a document store at the given path.
    pub fn open(path: &Path) -> StorageResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Opens an in-memory document store. Contents vanish on drop.
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StorageResult<Self> {
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StorageResult<()> {
        self.conn()?.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS documents (
                id VARCHAR PRIMARY KEY,
                name VARCHAR NOT NULL,
                doc_type VARCHAR NOT NULL,
                owner VARCHAR NOT NULL,
                data VARCHAR NOT NULL,
                created_at BIGINT NOT NULL,
                modified_at BIGINT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    fn conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    /// Fetches a document by id.
    pub fn get(&self, id: &DocumentId) -> StorageResult<Document> {
        let conn = self.conn()?;
        let row = conn.query_row(
            "SELECT name, doc_type, owner, data, created_at, modified_at FROM documents WHERE id = ?",
            params![id.to_string()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, i64>(5)?,
                ))
            },
        );

        let (name, doc_type, owner, data, created_at, modified_at) = match row {
            Ok(row) => row,
            Err(duckdb::Error::QueryReturnedNoRows) => {
                return Err(StorageError::NotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let data = serde_json::from_str(&data)
            .map_err(|e| StorageError::InvalidData(format!("document {id}: {e}")))?;

        Ok(Document {
            id: *id,
            name,
            doc_type,
            owner,
            data,
            created_at,
            modified_at,
        })
    }

    /// Creates and persists an empty document owned by `owner`.
    pub fn create(&self, name: &str, doc_type: &str, owner: &Requester) -> StorageResult<Document> {
        let document = Document::new(name, doc_type, owner);
        self.save(&document)?;
        debug!(id = %document.id, owner = %owner, doc_type, "Document created");
        Ok(document)
    }

    /// Writes the document, replacing name, data and modification time of
    /// any existing row with the same id. Owner and creation time are kept.
    pub fn save(&self, document: &Document) -> StorageResult<()> {
        let data = serde_json::to_string(&document.data)?;
        self.conn()?.execute(
            "INSERT INTO documents (id, name, doc_type, owner, data, created_at, modified_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                data = excluded.data,
                modified_at = excluded.modified_at",
            params![
                document.id.to_string(),
                document.name,
                document.doc_type,
                document.owner,
                data,
                document.created_at,
                document.modified_at,
            ],
        )?;
        debug!(id = %document.id, "Document saved");
        Ok(())
    }
}
