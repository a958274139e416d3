use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::notes::model::DailyNote;

/// Request DTO for creating a daily note
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNoteDto {
    /// Calendar day the note describes
    #[schema(example = "2025-03-14")]
    pub note_date: NaiveDate,
    /// Symptoms experienced that day
    pub symptoms: Option<String>,
    /// Mood that day
    pub mood: Option<String>,
    /// Body weight in kilograms
    #[validate(range(min = 0.0, message = "weight must be positive"))]
    pub weight: Option<f64>,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Request DTO for updating a daily note. The note date itself is fixed.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateNoteDto {
    pub symptoms: Option<String>,
    pub mood: Option<String>,
    #[validate(range(min = 0.0, message = "weight must be positive"))]
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

/// Response DTO for daily notes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteResponseDto {
    pub id: Uuid,
    pub note_date: NaiveDate,
    pub symptoms: Option<String>,
    pub mood: Option<String>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DailyNote> for NoteResponseDto {
    fn from(note: DailyNote) -> Self {
        Self {
            id: note.id,
            note_date: note.note_date,
            symptoms: note.symptoms,
            mood: note.mood,
            weight: note.weight,
            notes: note.notes,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}
