//! S3-compatible storage client for the private medical-document bucket
//!
//! Uses rust-s3 crate for lightweight S3 operations.

use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use tracing::{debug, info, warn};

use crate::core::config::StorageConfig;
use crate::core::error::AppError;

/// Client for the private document bucket.
///
/// The bucket has no public-read policy; the only read path is a signed URL
/// minted by `presigned_get_url`, scoped to one object and expiring after
/// the configured TTL.
pub struct StorageClient {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    signed_url_ttl_secs: u32,
}

impl StorageClient {
    /// Create a new storage client from configuration
    pub fn new(config: StorageConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create storage credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create storage bucket: {}", e)))?;

        // Use path-style URLs for MinIO (http://endpoint/bucket instead of http://bucket.endpoint)
        bucket.set_path_style();

        Ok(Self {
            bucket,
            region,
            credentials,
            signed_url_ttl_secs: config.signed_url_ttl_secs,
        })
    }

    /// Ensure the bucket exists, create if not
    pub async fn ensure_bucket_exists(&self) -> Result<(), AppError> {
        // Try to create bucket - if it already exists, the store will return
        // an error which we can safely ignore
        match self.create_bucket().await {
            Ok(_) => {
                info!("Bucket '{}' created successfully", self.bucket.name());
                Ok(())
            }
            Err(e) => {
                let error_str = e.to_string();
                // Bucket already exists - this is fine
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                    Ok(())
                } else {
                    // Log warning but don't fail - bucket might exist with different error
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                    Ok(())
                }
            }
        }
    }

    /// Create the bucket
    async fn create_bucket(&self) -> Result<(), AppError> {
        let bucket_config = BucketConfiguration::default();

        Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            bucket_config,
        )
        .await
        .map_err(|e| {
            AppError::Internal(format!(
                "Failed to create bucket '{}': {}",
                self.bucket.name(),
                e
            ))
        })?;

        Ok(())
    }

    /// Upload an object to the bucket.
    ///
    /// Never overwrites: an existing object at `key` is a conflict. Keys are
    /// built upstream from a timestamp plus the owner id, so a collision means
    /// something went wrong with key construction, not a benign re-upload.
    ///
    /// # Arguments
    /// * `key` - The object key (path) in the bucket
    /// * `data` - The file content as bytes
    /// * `content_type` - The MIME type of the file
    pub async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), AppError> {
        if self.exists(key).await? {
            return Err(AppError::Conflict(format!(
                "An object already exists at key '{}'",
                key
            )));
        }

        self.bucket
            .put_object_with_content_type(key, &data, content_type)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload object '{}': {}", key, e)))?;

        debug!("Uploaded object '{}' to bucket '{}'", key, self.bucket.name());
        Ok(())
    }

    /// Generate a signed URL for reading one object.
    ///
    /// Every call issues a fresh, independently-scoped URL valid for the
    /// configured TTL. Links are never cached; asking again before expiry is
    /// allowed and yields a new token.
    ///
    /// # Errors
    /// `NotFound` if no object exists at `key`, `Storage` otherwise.
    pub async fn presigned_get_url(&self, key: &str) -> Result<String, AppError> {
        if !self.exists(key).await? {
            return Err(AppError::NotFound(format!(
                "No object found at key '{}'",
                key
            )));
        }

        let url = self
            .bucket
            .presign_get(key, self.signed_url_ttl_secs, None)
            .await
            .map_err(|e| {
                AppError::Storage(format!("Failed to generate signed URL for '{}': {}", key, e))
            })?;

        Ok(url)
    }

    /// Delete an object from the bucket.
    ///
    /// S3 deletes are idempotent: removing a key that is already gone
    /// succeeds, so callers must not rely on an error to detect "already
    /// deleted".
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.bucket
            .delete_object(key)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to delete object '{}': {}", key, e)))?;

        debug!(
            "Deleted object '{}' from bucket '{}'",
            key,
            self.bucket.name()
        );
        Ok(())
    }

    /// Check if an object exists in the bucket
    pub async fn exists(&self, key: &str) -> Result<bool, AppError> {
        match self.bucket.head_object(key).await {
            Ok(_) => Ok(true),
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("404") || error_str.contains("NoSuchKey") {
                    Ok(false)
                } else {
                    Err(AppError::Storage(format!(
                        "Failed to check if object '{}' exists: {}",
                        key, e
                    )))
                }
            }
        }
    }

    /// Get the signed URL expiry time in seconds
    pub fn signed_url_ttl_secs(&self) -> u32 {
        self.signed_url_ttl_secs
    }

    /// Get the bucket name
    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }
}
