use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::pregnancy::model::PregnancyInfo;

/// Request DTO for setting up or editing pregnancy info
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertPregnancyInfoDto {
    /// Estimated due date
    #[schema(example = "2025-11-02")]
    pub due_date: NaiveDate,
    /// First day of the last menstrual period
    pub last_period_date: Option<NaiveDate>,
    /// Attending doctor
    pub doctor_name: Option<String>,
}

/// Response DTO for pregnancy info
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PregnancyInfoResponseDto {
    pub id: Uuid,
    pub due_date: NaiveDate,
    pub last_period_date: Option<NaiveDate>,
    pub doctor_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PregnancyInfo> for PregnancyInfoResponseDto {
    fn from(info: PregnancyInfo) -> Self {
        Self {
            id: info.id,
            due_date: info.due_date,
            last_period_date: info.last_period_date,
            doctor_name: info.doctor_name,
            created_at: info.created_at,
            updated_at: info.updated_at,
        }
    }
}
