//! Transform error taxonomy.
//!
//! Every failure in the pipeline is fatal to the call: there is no retry,
//! no fallback format, and no partial result. User-facing recovery lives
//! entirely in the calling layer.

use photogal_core::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Input bytes are not a decodable image.
    #[error("failed to decode input image: {0}")]
    Decode(#[source] image::ImageError),

    /// The encoder rejected the processed image.
    #[error("failed to encode output image: {0}")]
    Encode(#[source] image::ImageError),

    /// A pipeline operation failed against the current image state.
    #[error("{operation} operation failed: {reason}")]
    Operation {
        operation: &'static str,
        reason: String,
    },

    /// The call was abandoned before completion.
    #[error("image transform cancelled")]
    Cancelled,

    /// The blocking-pool task running the pixel work died.
    #[error("image processing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<TransformError> for AppError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Cancelled => AppError::Internal("image transform cancelled".into()),
            TransformError::Task(e) => AppError::Internal(format!("image processing task failed: {e}")),
            other => AppError::ImageProcessing(other.to_string()),
        }
    }
}
