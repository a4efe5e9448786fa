//! Transform template: decode, pipeline, encode, optional thumbnail.
//!
//! Storage and download transforms share this whole algorithm and differ
//! only in the thumbnail policy fixed at construction, so the two flavors
//! are one struct with a flag rather than a type hierarchy.

use std::io::Cursor;

use bytes::Bytes;
use image::{DynamicImage, GenericImageView, ImageFormat};
use tokio_util::sync::CancellationToken;

use photogal_core::constants::THUMBNAIL_SIZE;
use photogal_core::ImageProcessingOptions;

use crate::error::TransformError;
use crate::factory::OperationFactory;
use crate::format::OutputFormat;
use crate::pipeline::ProcessingPipeline;
use crate::resize::ImageResize;

/// One encoded output buffer with its metadata.
///
/// Ownership of `data` moves to the caller with the result; nothing inside
/// the pipeline holds on to it.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub data: Bytes,
    pub content_type: &'static str,
    pub extension: &'static str,
}

/// Result of one transform call.
#[derive(Debug)]
pub struct TransformResult {
    pub image: EncodedImage,
    /// Present only for storage-mode transforms.
    pub thumbnail: Option<EncodedImage>,
}

impl TransformResult {
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail.is_some()
    }
}

/// The shared transform algorithm, parameterized by thumbnail policy.
pub struct TransformTemplate {
    create_thumbnail: bool,
}

impl TransformTemplate {
    /// Storage-mode template: produces the main image plus a thumbnail.
    pub fn storage() -> Self {
        Self {
            create_thumbnail: true,
        }
    }

    /// Download-mode template: produces only the re-encoded main image.
    pub fn download() -> Self {
        Self {
            create_thumbnail: false,
        }
    }

    pub fn creates_thumbnail(&self) -> bool {
        self.create_thumbnail
    }

    /// Run the transform: decode `input`, apply the operations derived from
    /// `options`, encode to the requested format, and in storage mode derive
    /// a cropped square thumbnail from the processed image.
    ///
    /// The cancellation token is honored before decode, before encode, and
    /// before the thumbnail encode; a cancelled call returns
    /// [`TransformError::Cancelled`] and leaks nothing.
    pub async fn transform(
        &self,
        input: Bytes,
        original_file_name: &str,
        options: &ImageProcessingOptions,
        cancel: &CancellationToken,
    ) -> Result<TransformResult, TransformError> {
        let format = OutputFormat::resolve(options.output_format.as_deref());
        let operations = OperationFactory::create(options);

        tracing::debug!(
            file = %original_file_name,
            output_format = ?format,
            operations = operations.len(),
            thumbnail = self.create_thumbnail,
            "Starting image transform"
        );

        if cancel.is_cancelled() {
            return Err(TransformError::Cancelled);
        }

        // Decode and run the pipeline; pixel work is CPU-bound, keep it off
        // the async pool.
        let processed = tokio::task::spawn_blocking(move || {
            let image = image::ImageReader::new(Cursor::new(input))
                .with_guessed_format()
                .map_err(|e| TransformError::Decode(image::ImageError::IoError(e)))?
                .decode()
                .map_err(TransformError::Decode)?;

            let mut pipeline = ProcessingPipeline::new();
            pipeline.add_operations(operations);
            pipeline.execute(image)
        })
        .await??;

        if cancel.is_cancelled() {
            return Err(TransformError::Cancelled);
        }

        let (encoded, processed) = tokio::task::spawn_blocking(move || {
            let data = encode_image(&processed, format)?;
            Ok::<_, TransformError>((data, processed))
        })
        .await??;

        let image = EncodedImage {
            data: encoded,
            content_type: format.mime_type(),
            extension: format.extension(),
        };

        if !self.create_thumbnail {
            return Ok(TransformResult {
                image,
                thumbnail: None,
            });
        }

        if cancel.is_cancelled() {
            return Err(TransformError::Cancelled);
        }

        // The thumbnail derives from the processed image, so the requested
        // operations show up in it as well. Always JPEG.
        let thumbnail_data = tokio::task::spawn_blocking(move || {
            let thumbnail = ImageResize::crop_to_fill(&processed, THUMBNAIL_SIZE, THUMBNAIL_SIZE);
            encode_image(&thumbnail, OutputFormat::Jpeg)
        })
        .await??;

        tracing::debug!(file = %original_file_name, "Image transform complete");

        Ok(TransformResult {
            image,
            thumbnail: Some(EncodedImage {
                data: thumbnail_data,
                content_type: OutputFormat::Jpeg.mime_type(),
                extension: OutputFormat::Jpeg.extension(),
            }),
        })
    }
}

fn encode_image(image: &DynamicImage, format: OutputFormat) -> Result<Bytes, TransformError> {
    let (width, height) = image.dimensions();
    let estimated_size = (width * height * 3) as usize;
    let mut buffer = Vec::with_capacity(estimated_size);
    let mut cursor = Cursor::new(&mut buffer);

    match format {
        // The JPEG encoder rejects alpha channels
        OutputFormat::Jpeg => {
            DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut cursor, ImageFormat::Jpeg)
        }
        _ => image.write_to(&mut cursor, format.to_image_format()),
    }
    .map_err(TransformError::Encode)?;

    Ok(Bytes::from(buffer))
}
