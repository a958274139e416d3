use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for daily pregnancy notes
#[derive(Debug, FromRow)]
pub struct DailyNote {
    pub id: Uuid,
    pub user_id: String,
    pub note_date: NaiveDate,
    pub symptoms: Option<String>,
    pub mood: Option<String>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
