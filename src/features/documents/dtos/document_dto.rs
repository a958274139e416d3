use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Broad media kind of an uploaded document, fixed at upload time from the
/// declared content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKindDto {
    Pdf,
    Image,
}

impl MediaKindDto {
    /// Anything whose declared content type mentions pdf is a PDF; every
    /// other allowed upload is an image.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.contains("pdf") {
            MediaKindDto::Pdf
        } else {
            MediaKindDto::Image
        }
    }

    pub fn from_db(value: &str) -> Self {
        match value {
            "pdf" => MediaKindDto::Pdf,
            _ => MediaKindDto::Image,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKindDto::Pdf => "pdf",
            MediaKindDto::Image => "image",
        }
    }
}

/// Medical document category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategoryDto {
    Ultrasound,
    Labresult,
    Prescription,
    #[default]
    Other,
}

impl DocumentCategoryDto {
    /// Unknown values fall back to `other`
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "ultrasound" => DocumentCategoryDto::Ultrasound,
            "labresult" => DocumentCategoryDto::Labresult,
            "prescription" => DocumentCategoryDto::Prescription,
            _ => DocumentCategoryDto::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategoryDto::Ultrasound => "ultrasound",
            DocumentCategoryDto::Labresult => "labresult",
            DocumentCategoryDto::Prescription => "prescription",
            DocumentCategoryDto::Other => "other",
        }
    }
}

/// Upload document request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadDocumentDto {
    /// The file to upload (PDF or image)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Display title for the document
    #[schema(example = "Ultrasound week 12")]
    pub title: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Date the medical event occurred (YYYY-MM-DD), distinct from the upload time
    #[schema(example = "2025-03-14")]
    pub document_date: Option<String>,
    /// Document category: ultrasound, labresult, prescription or other
    #[schema(example = "ultrasound")]
    pub category: Option<String>,
}

/// Response DTO for document operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponseDto {
    /// Unique identifier for the document
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Canonical storage key of the underlying object
    pub file_key: String,
    /// Media kind (pdf or image)
    pub media_kind: MediaKindDto,
    /// Size of the file in bytes
    pub file_size: i64,
    /// Document category
    pub category: DocumentCategoryDto,
    /// Date the medical event occurred, if supplied
    pub document_date: Option<NaiveDate>,
    /// Timestamp when the document was uploaded
    pub uploaded_at: DateTime<Utc>,
    /// Fresh signed view link. Absent when link issuance failed for this
    /// record, or on responses that do not issue links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_url: Option<String>,
}

/// Response DTO for view-link requests
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewLinkResponseDto {
    /// Signed URL granting read access to exactly this document
    pub signed_url: String,
    /// Seconds until the link expires
    pub expires_in_secs: u32,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteDocumentResponseDto {
    /// Confirmation that the document was deleted
    pub deleted: bool,
}

/// Allowed MIME types for document uploads
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
];

/// Check if a MIME type is allowed
pub fn is_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_content_type() {
        assert_eq!(
            MediaKindDto::from_content_type("application/pdf"),
            MediaKindDto::Pdf
        );
        assert_eq!(
            MediaKindDto::from_content_type("image/jpeg"),
            MediaKindDto::Image
        );
        assert_eq!(
            MediaKindDto::from_content_type("image/png"),
            MediaKindDto::Image
        );
    }

    #[test]
    fn test_category_parse_known_values() {
        assert_eq!(
            DocumentCategoryDto::parse("ultrasound"),
            DocumentCategoryDto::Ultrasound
        );
        assert_eq!(
            DocumentCategoryDto::parse("LabResult"),
            DocumentCategoryDto::Labresult
        );
        assert_eq!(
            DocumentCategoryDto::parse("prescription"),
            DocumentCategoryDto::Prescription
        );
    }

    #[test]
    fn test_category_parse_defaults_to_other() {
        assert_eq!(DocumentCategoryDto::parse(""), DocumentCategoryDto::Other);
        assert_eq!(
            DocumentCategoryDto::parse("something-else"),
            DocumentCategoryDto::Other
        );
    }

    #[test]
    fn test_category_round_trips_through_db_strings() {
        for category in [
            DocumentCategoryDto::Ultrasound,
            DocumentCategoryDto::Labresult,
            DocumentCategoryDto::Prescription,
            DocumentCategoryDto::Other,
        ] {
            assert_eq!(DocumentCategoryDto::parse(category.as_str()), category);
        }
    }

    #[test]
    fn test_mime_type_allowlist() {
        assert!(is_mime_type_allowed("application/pdf"));
        assert!(is_mime_type_allowed("image/webp"));
        assert!(!is_mime_type_allowed("text/html"));
        assert!(!is_mime_type_allowed("application/octet-stream"));
    }
}
