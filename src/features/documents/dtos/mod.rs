mod document_dto;

pub use document_dto::{
    is_mime_type_allowed, DeleteDocumentResponseDto, DocumentCategoryDto, DocumentResponseDto,
    MediaKindDto, UploadDocumentDto, ViewLinkResponseDto, ALLOWED_MIME_TYPES,
};
