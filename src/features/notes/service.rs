use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::notes::dto::{CreateNoteDto, NoteResponseDto, UpdateNoteDto};
use crate::features::notes::model::DailyNote;

/// Service for daily pregnancy notes
pub struct NoteService {
    pool: PgPool,
}

impl NoteService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All notes for one user, newest day first
    pub async fn list(&self, user_id: &str) -> Result<Vec<NoteResponseDto>> {
        let notes = sqlx::query_as::<_, DailyNote>(
            "SELECT id, user_id, note_date, symptoms, mood, weight, notes, created_at, updated_at \
             FROM daily_notes WHERE user_id = $1 ORDER BY note_date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes.into_iter().map(NoteResponseDto::from).collect())
    }

    pub async fn create(&self, dto: CreateNoteDto, user_id: &str) -> Result<NoteResponseDto> {
        let note = sqlx::query_as::<_, DailyNote>(
            "INSERT INTO daily_notes (user_id, note_date, symptoms, mood, weight, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, user_id, note_date, symptoms, mood, weight, notes, created_at, updated_at",
        )
        .bind(user_id)
        .bind(dto.note_date)
        .bind(&dto.symptoms)
        .bind(&dto.mood)
        .bind(dto.weight)
        .bind(&dto.notes)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Note created: id={}, date={}", note.id, note.note_date);

        Ok(note.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateNoteDto,
        user_id: &str,
    ) -> Result<NoteResponseDto> {
        let note = sqlx::query_as::<_, DailyNote>(
            "UPDATE daily_notes \
             SET symptoms = $1, mood = $2, weight = $3, notes = $4, updated_at = NOW() \
             WHERE id = $5 AND user_id = $6 \
             RETURNING id, user_id, note_date, symptoms, mood, weight, notes, created_at, updated_at",
        )
        .bind(&dto.symptoms)
        .bind(&dto.mood)
        .bind(dto.weight)
        .bind(&dto.notes)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

        Ok(note.into())
    }

    pub async fn delete(&self, id: Uuid, user_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM daily_notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Note not found".to_string()));
        }

        Ok(())
    }
}
