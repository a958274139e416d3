use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::documents::models::{Document, NewDocument};

const DOCUMENT_COLUMNS: &str = "id, user_id, title, description, file_key, file_type, \
     file_size, category, document_date, uploaded_at";

/// Durable store of document metadata rows.
///
/// The metadata table is the source of truth for listing and ordering;
/// every query is scoped by the owning user id.
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new document row and return it with generated fields.
    ///
    /// A storage-key collision (unique constraint on `file_key`) surfaces
    /// as a conflict rather than a generic database error.
    pub async fn insert(&self, new: NewDocument) -> Result<Document> {
        let sql = format!(
            "INSERT INTO medical_documents \
                 (user_id, title, description, file_key, file_type, file_size, category, document_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {}",
            DOCUMENT_COLUMNS
        );

        sqlx::query_as::<_, Document>(&sql)
            .bind(&new.user_id)
            .bind(&new.title)
            .bind(&new.description)
            .bind(&new.file_key)
            .bind(&new.file_type)
            .bind(new.file_size)
            .bind(&new.category)
            .bind(new.document_date)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(
                    format!("A document already exists for key '{}'", new.file_key),
                ),
                _ => AppError::Database(e),
            })
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Document>> {
        let sql = format!(
            "SELECT {} FROM medical_documents WHERE id = $1",
            DOCUMENT_COLUMNS
        );

        let document = sqlx::query_as::<_, Document>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(document)
    }

    /// All documents belonging to `owner_id`, newest upload first.
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Document>> {
        let sql = format!(
            "SELECT {} FROM medical_documents WHERE user_id = $1 ORDER BY uploaded_at DESC",
            DOCUMENT_COLUMNS
        );

        let documents = sqlx::query_as::<_, Document>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(documents)
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM medical_documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
