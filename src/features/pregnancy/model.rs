use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for pregnancy info. One row per user.
#[derive(Debug, FromRow)]
pub struct PregnancyInfo {
    pub id: Uuid,
    pub user_id: String,
    pub due_date: NaiveDate,
    pub last_period_date: Option<NaiveDate>,
    pub doctor_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
