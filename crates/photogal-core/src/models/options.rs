use serde::{Deserialize, Serialize};

/// Declarative image processing options for one transform call.
///
/// Presence of a field is the sole trigger for the corresponding pipeline
/// operation; absent fields mean the operation is skipped entirely. No
/// field combination is validated here - `resize_width` alone is legal,
/// `resize_height` alone triggers nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageProcessingOptions {
    /// Target width; triggers a resize when set.
    pub resize_width: Option<u32>,
    /// Target height; falls back to `resize_width` when unset.
    pub resize_height: Option<u32>,
    /// Requested output format: "jpg", "png" or "bmp". Unset, blank, or
    /// unrecognized values resolve to JPEG at encode time.
    pub output_format: Option<String>,
    /// Apply a sepia tone to the whole image.
    pub apply_sepia: bool,
    /// Gaussian blur sigma; triggers a blur when set.
    pub blur_amount: Option<f32>,
}

impl ImageProcessingOptions {
    /// Effective resize height: explicit height, else the width (square).
    pub fn effective_resize_height(&self) -> Option<u32> {
        self.resize_height.or(self.resize_width)
    }

    /// Whether the requested output format is present and non-blank.
    pub fn has_output_format(&self) -> bool {
        self.output_format
            .as_deref()
            .is_some_and(|f| !f.trim().is_empty())
    }
}
