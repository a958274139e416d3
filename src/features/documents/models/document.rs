use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for medical documents.
///
/// `file_key` holds the canonical storage key for rows written by this
/// service; rows from the old public-bucket schema may still hold a full
/// URL, which the storage-key resolver tolerates on every read path.
#[derive(Debug, Clone, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub file_key: String,
    pub file_type: String,
    pub file_size: i64,
    pub category: String,
    pub document_date: Option<NaiveDate>,
    pub uploaded_at: DateTime<Utc>,
}

/// Fields for a new document row. `id` and `uploaded_at` are assigned by
/// the database.
#[derive(Debug)]
pub struct NewDocument {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub file_key: String,
    pub file_type: String,
    pub file_size: i64,
    pub category: String,
    pub document_date: Option<NaiveDate>,
}
