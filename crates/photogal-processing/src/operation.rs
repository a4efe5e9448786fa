//! Pipeline operations.
//!
//! An [`Operation`] is one named, composable image transformation built by
//! the factory for a single transform call, applied once in pipeline order,
//! then discarded.

use image::DynamicImage;

use crate::error::TransformError;
use crate::filters::ImageFilters;
use crate::format::OutputFormat;
use crate::resize::ImageResize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Bound the image to `width` x `height`, preserving aspect ratio.
    Resize { width: u32, height: u32 },
    /// Pixel pass-through; records the encoder used later.
    Format(OutputFormat),
    /// Sepia tone over the whole image.
    Sepia,
    /// Gaussian blur with the given sigma.
    Blur { sigma: f32 },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Resize { .. } => "Resize",
            Operation::Format(_) => "Format",
            Operation::Sepia => "Sepia",
            Operation::Blur { .. } => "Blur",
        }
    }

    /// Apply this operation to an in-memory image.
    pub fn apply(&self, image: DynamicImage) -> Result<DynamicImage, TransformError> {
        match self {
            Operation::Resize { width, height } => {
                Ok(ImageResize::max_fit(&image, *width, *height))
            }
            // Format only selects the encoder for the later encode step
            Operation::Format(_) => Ok(image),
            Operation::Sepia => Ok(ImageFilters::apply_sepia(image)),
            Operation::Blur { sigma } => {
                if !sigma.is_finite() || *sigma <= 0.0 {
                    return Err(TransformError::Operation {
                        operation: "Blur",
                        reason: format!("invalid blur sigma {sigma}"),
                    });
                }
                Ok(ImageFilters::apply_blur(image, *sigma))
            }
        }
    }
}
