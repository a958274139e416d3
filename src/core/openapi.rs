use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::appointments::{dto as appointments_dto, handler as appointments_handler};
use crate::features::documents::{dtos as documents_dtos, handlers as documents_handlers};
use crate::features::notes::{dto as notes_dto, handler as notes_handler};
use crate::features::pregnancy::{dto as pregnancy_dto, handler as pregnancy_handler};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Documents
        documents_handlers::upload_document,
        documents_handlers::list_documents,
        documents_handlers::get_view_link,
        documents_handlers::delete_document,
        // Notes
        notes_handler::list_notes,
        notes_handler::create_note,
        notes_handler::update_note,
        notes_handler::delete_note,
        // Appointments
        appointments_handler::list_appointments,
        appointments_handler::create_appointment,
        appointments_handler::update_appointment,
        appointments_handler::delete_appointment,
        // Pregnancy
        pregnancy_handler::get_pregnancy_info,
        pregnancy_handler::upsert_pregnancy_info,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Documents
            documents_dtos::UploadDocumentDto,
            documents_dtos::MediaKindDto,
            documents_dtos::DocumentCategoryDto,
            documents_dtos::DocumentResponseDto,
            documents_dtos::ViewLinkResponseDto,
            documents_dtos::DeleteDocumentResponseDto,
            ApiResponse<documents_dtos::DocumentResponseDto>,
            ApiResponse<Vec<documents_dtos::DocumentResponseDto>>,
            ApiResponse<documents_dtos::ViewLinkResponseDto>,
            ApiResponse<documents_dtos::DeleteDocumentResponseDto>,
            // Notes
            notes_dto::CreateNoteDto,
            notes_dto::UpdateNoteDto,
            notes_dto::NoteResponseDto,
            ApiResponse<notes_dto::NoteResponseDto>,
            ApiResponse<Vec<notes_dto::NoteResponseDto>>,
            // Appointments
            appointments_dto::UpsertAppointmentDto,
            appointments_dto::AppointmentResponseDto,
            ApiResponse<appointments_dto::AppointmentResponseDto>,
            ApiResponse<Vec<appointments_dto::AppointmentResponseDto>>,
            // Pregnancy
            pregnancy_dto::UpsertPregnancyInfoDto,
            pregnancy_dto::PregnancyInfoResponseDto,
            ApiResponse<pregnancy_dto::PregnancyInfoResponseDto>,
        )
    ),
    tags(
        (name = "documents", description = "Medical document vault: uploads, signed view links, deletion"),
        (name = "notes", description = "Daily pregnancy notes"),
        (name = "appointments", description = "Medical appointments"),
        (name = "pregnancy", description = "Pregnancy info (due date, last period, doctor)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Matria API",
        version = "0.1.0",
        description = "API documentation for Matria",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
