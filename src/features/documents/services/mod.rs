mod document_repository;
mod document_service;
pub mod storage_key;

pub use document_repository::DocumentRepository;
pub use document_service::{DocumentService, DocumentUpload};
