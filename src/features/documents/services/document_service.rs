use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::documents::dtos::{
    DocumentCategoryDto, DocumentResponseDto, MediaKindDto, ViewLinkResponseDto,
};
use crate::features::documents::models::{Document, NewDocument};
use crate::features::documents::services::document_repository::DocumentRepository;
use crate::features::documents::services::storage_key;
use crate::modules::storage::StorageClient;

/// One upload request, already pulled out of the multipart body.
#[derive(Debug)]
pub struct DocumentUpload {
    pub data: Vec<u8>,
    pub original_filename: String,
    pub content_type: String,
    pub title: String,
    pub description: Option<String>,
    pub document_date: Option<NaiveDate>,
    pub category: DocumentCategoryDto,
}

/// Orchestrates the document vault: blob writes, metadata bookkeeping and
/// signed-link issuance, with legacy references resolved on every read path.
pub struct DocumentService {
    repository: DocumentRepository,
    storage: Arc<StorageClient>,
}

impl DocumentService {
    pub fn new(repository: DocumentRepository, storage: Arc<StorageClient>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    /// Upload a document: blob write first, metadata row second.
    ///
    /// If the blob write fails nothing is persisted. If the metadata insert
    /// fails afterwards, the stored object is orphaned; it is invisible
    /// without a row and there is no reconciliation sweep, so the key is
    /// logged and the error surfaced as a failed upload.
    pub async fn upload(&self, upload: DocumentUpload, user_id: &str) -> Result<DocumentResponseDto> {
        if upload.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".to_string()));
        }
        if upload.data.is_empty() {
            return Err(AppError::Validation("file is required".to_string()));
        }

        let media_kind = MediaKindDto::from_content_type(&upload.content_type);
        let file_size = upload.data.len() as i64;
        let file_key = storage_key::build(
            user_id,
            &upload.original_filename,
            Utc::now().timestamp_millis(),
        );

        self.storage
            .upload(&file_key, upload.data, &upload.content_type)
            .await?;

        debug!("Document uploaded to storage: {}", file_key);

        let document = self
            .repository
            .insert(NewDocument {
                user_id: user_id.to_string(),
                title: upload.title,
                description: upload.description,
                file_key: file_key.clone(),
                file_type: media_kind.as_str().to_string(),
                file_size,
                category: upload.category.as_str().to_string(),
                document_date: upload.document_date,
            })
            .await
            .inspect_err(|e| {
                warn!(
                    "Metadata insert failed after blob write; orphaned object at '{}': {}",
                    file_key, e
                );
            })?;

        info!(
            "Document uploaded: id={}, key={}, kind={}, size={}",
            document.id, document.file_key, document.file_type, document.file_size
        );

        Ok(Self::to_response(document, None))
    }

    /// List all documents for `user_id`, newest first, each carrying a fresh
    /// signed view link.
    ///
    /// Links are issued concurrently and independently per record; one
    /// record whose link cannot be issued (a legacy row whose blob is gone,
    /// a transient store fault) is returned without a link instead of
    /// failing the whole listing.
    pub async fn list(&self, user_id: &str) -> Result<Vec<DocumentResponseDto>> {
        let records = self.repository.list_by_owner(user_id).await?;
        let bucket = self.storage.bucket_name();

        let tasks = records.into_iter().map(|record| {
            let bucket = bucket.clone();
            async move {
                let key = storage_key::resolve(&record.file_key, &bucket);
                match self.storage.presigned_get_url(&key).await {
                    Ok(url) => Self::to_response(record, Some(url)),
                    Err(e) => {
                        warn!(
                            "Could not issue view link for document {} (key '{}'): {}",
                            record.id, key, e
                        );
                        Self::to_response(record, None)
                    }
                }
            }
        });

        Ok(futures::future::join_all(tasks).await)
    }

    /// Re-issue a fresh signed URL for one document, called right before the
    /// UI renders it since any link from an earlier listing may have expired.
    pub async fn view_link(&self, id: Uuid, user_id: &str) -> Result<ViewLinkResponseDto> {
        let document = self.find_owned(id, user_id).await?;
        let key = storage_key::resolve(&document.file_key, &self.storage.bucket_name());

        match self.storage.presigned_get_url(&key).await {
            Ok(signed_url) => Ok(ViewLinkResponseDto {
                signed_url,
                expires_in_secs: self.storage.signed_url_ttl_secs(),
            }),
            // The object is gone (deleted out-of-band, or a legacy row whose
            // blob never migrated) - that is a hard not-found, not a retryable
            // link failure
            Err(e @ AppError::NotFound(_)) => Err(e),
            Err(e) => {
                warn!(
                    "View link issuance failed for document {} (key '{}'): {}",
                    document.id, key, e
                );
                Err(AppError::LinkUnavailable(format!(
                    "Could not issue a view link for document {}",
                    document.id
                )))
            }
        }
    }

    /// Delete a document: blob removal first, metadata row second.
    ///
    /// If blob removal fails the metadata row is left untouched - the
    /// document must not vanish from the owner's list while its content is
    /// still stored. Only the owner can delete a record.
    pub async fn delete(&self, id: Uuid, user_id: &str) -> Result<()> {
        let document = self.find_owned(id, user_id).await?;
        let key = storage_key::resolve(&document.file_key, &self.storage.bucket_name());

        self.storage.delete(&key).await?;
        self.repository.delete_by_id(document.id).await?;

        info!("Document deleted: id={}, key={}", document.id, key);

        Ok(())
    }

    async fn find_owned(&self, id: Uuid, user_id: &str) -> Result<Document> {
        let document = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

        if document.user_id != user_id {
            return Err(AppError::Forbidden(
                "You do not have permission to access this document".to_string(),
            ));
        }

        Ok(document)
    }

    fn to_response(document: Document, signed_url: Option<String>) -> DocumentResponseDto {
        DocumentResponseDto {
            id: document.id,
            title: document.title,
            description: document.description,
            file_key: document.file_key,
            media_kind: MediaKindDto::from_db(&document.file_type),
            file_size: document.file_size,
            category: DocumentCategoryDto::parse(&document.category),
            document_date: document.document_date,
            uploaded_at: document.uploaded_at,
            signed_url,
        }
    }
}
