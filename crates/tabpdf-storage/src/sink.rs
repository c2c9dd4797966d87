use std::future::Future;
use std::time::Duration;

use aws_sdk_s3::Client;
use tracing::info;

use crate::error::StorageError;
use crate::objects;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Where rendered PDFs go and how they are handed out.
pub trait ObjectSink {
    /// Store a PDF under `bucket`/`key`.
    fn store_pdf(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Time-limited GET link for `bucket`/`key`.
    fn signed_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> impl Future<Output = Result<String, StorageError>> + Send;
}

/// [`ObjectSink`] backed by S3.
#[derive(Clone)]
pub struct S3Sink {
    client: Client,
}

impl S3Sink {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ObjectSink for S3Sink {
    async fn store_pdf(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        info!(bucket, key, bytes = body.len(), "uploading pdf to s3");
        let etag = objects::put_object(&self.client, bucket, key, body, Some(PDF_CONTENT_TYPE)).await?;
        info!(bucket, key, etag = %etag, "pdf uploaded");
        Ok(())
    }

    async fn signed_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        info!(bucket, key, expires_in_secs = expires_in.as_secs(), "presigning url");
        objects::presign_get(&self.client, bucket, key, expires_in).await
    }
}
