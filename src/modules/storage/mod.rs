//! Storage module for medical document blobs
//!
//! Provides an S3-compatible client for a private bucket: object upload,
//! deletion, and short-lived signed URL generation. No object in the bucket
//! is reachable without a signed URL.

mod storage_client;

pub use storage_client::StorageClient;
