//! Transform service facade.
//!
//! Callers depend on [`ImageTransformService`] and never on the two
//! concrete template configurations; the facade only dispatches.

use async_trait::async_trait;
use bytes::Bytes;
use tokio_util::sync::CancellationToken;

use photogal_core::ImageProcessingOptions;

use crate::error::TransformError;
use crate::template::{TransformResult, TransformTemplate};

#[async_trait]
pub trait ImageTransformService: Send + Sync {
    /// Transform for the upload flow: main image plus thumbnail.
    async fn transform_for_storage(
        &self,
        input: Bytes,
        original_file_name: &str,
        options: &ImageProcessingOptions,
        cancel: &CancellationToken,
    ) -> Result<TransformResult, TransformError>;

    /// Transform for the download flow: re-encoded main image only.
    async fn transform_for_download(
        &self,
        input: Bytes,
        original_file_name: &str,
        options: &ImageProcessingOptions,
        cancel: &CancellationToken,
    ) -> Result<TransformResult, TransformError>;
}

/// Default transform service holding the two configured templates.
pub struct PhotoTransformService {
    storage_template: TransformTemplate,
    download_template: TransformTemplate,
}

impl PhotoTransformService {
    pub fn new() -> Self {
        Self {
            storage_template: TransformTemplate::storage(),
            download_template: TransformTemplate::download(),
        }
    }
}

impl Default for PhotoTransformService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageTransformService for PhotoTransformService {
    async fn transform_for_storage(
        &self,
        input: Bytes,
        original_file_name: &str,
        options: &ImageProcessingOptions,
        cancel: &CancellationToken,
    ) -> Result<TransformResult, TransformError> {
        self.storage_template
            .transform(input, original_file_name, options, cancel)
            .await
    }

    async fn transform_for_download(
        &self,
        input: Bytes,
        original_file_name: &str,
        options: &ImageProcessingOptions,
        cancel: &CancellationToken,
    ) -> Result<TransformResult, TransformError> {
        self.download_template
            .transform(input, original_file_name, options, cancel)
            .await
    }
}
