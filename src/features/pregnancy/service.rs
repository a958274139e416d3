use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::pregnancy::dto::{PregnancyInfoResponseDto, UpsertPregnancyInfoDto};
use crate::features::pregnancy::model::PregnancyInfo;

const PREGNANCY_COLUMNS: &str =
    "id, user_id, due_date, last_period_date, doctor_name, created_at, updated_at";

/// Service for pregnancy info. Week and trimester math happens client-side;
/// this only keeps the dates.
pub struct PregnancyService {
    pool: PgPool,
}

impl PregnancyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, user_id: &str) -> Result<PregnancyInfoResponseDto> {
        let sql = format!(
            "SELECT {} FROM pregnancy_info WHERE user_id = $1",
            PREGNANCY_COLUMNS
        );

        let info = sqlx::query_as::<_, PregnancyInfo>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Pregnancy info not set up yet".to_string()))?;

        Ok(info.into())
    }

    /// Insert on first setup, overwrite on later edits
    pub async fn upsert(
        &self,
        dto: UpsertPregnancyInfoDto,
        user_id: &str,
    ) -> Result<PregnancyInfoResponseDto> {
        let sql = format!(
            "INSERT INTO pregnancy_info (user_id, due_date, last_period_date, doctor_name) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id) DO UPDATE \
                 SET due_date = EXCLUDED.due_date, \
                     last_period_date = EXCLUDED.last_period_date, \
                     doctor_name = EXCLUDED.doctor_name, \
                     updated_at = NOW() \
             RETURNING {}",
            PREGNANCY_COLUMNS
        );

        let info = sqlx::query_as::<_, PregnancyInfo>(&sql)
            .bind(user_id)
            .bind(dto.due_date)
            .bind(dto.last_period_date)
            .bind(&dto.doctor_name)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!("Pregnancy info saved: id={}, due={}", info.id, info.due_date);

        Ok(info.into())
    }
}
