//! Processing pipeline for chaining image operations.

use image::DynamicImage;

use crate::error::TransformError;
use crate::operation::Operation;

/// Ordered, call-scoped sequence of operations applied to one image.
///
/// Operations run strictly in insertion order, each one's output feeding
/// the next; the order is semantic (sepia-then-blur differs from
/// blur-then-sepia). An empty pipeline is a legal no-op.
pub struct ProcessingPipeline {
    operations: Vec<Operation>,
}

impl ProcessingPipeline {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    pub fn add_operations(&mut self, operations: Vec<Operation>) {
        self.operations.extend(operations);
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Execute the pipeline on a decoded image.
    pub fn execute(&self, mut image: DynamicImage) -> Result<DynamicImage, TransformError> {
        for operation in &self.operations {
            tracing::debug!(operation = operation.name(), "Applying operation");
            image = operation.apply(image)?;
        }
        Ok(image)
    }
}

impl Default for ProcessingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;
    use image::{GenericImageView, Rgba, RgbaImage};

    fn sample_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(32, 24, Rgba([120, 80, 60, 255])))
    }

    #[test]
    fn test_empty_pipeline_is_noop() {
        let pipeline = ProcessingPipeline::new();
        assert!(pipeline.is_empty());
        let img = sample_image();
        let out = pipeline.execute(img.clone()).unwrap();
        assert_eq!(out.to_rgba8().as_raw(), img.to_rgba8().as_raw());
    }

    #[test]
    fn test_operations_run_in_insertion_order() {
        // Resize-then-sepia: the sepia output must have the resized dimensions
        let mut pipeline = ProcessingPipeline::new();
        pipeline.add_operations(vec![
            Operation::Resize {
                width: 16,
                height: 16,
            },
            Operation::Sepia,
        ]);
        let out = pipeline.execute(sample_image()).unwrap();
        let (w, h) = out.dimensions();
        assert!(w <= 16 && h <= 16);
        let pixel = *out.to_rgba8().get_pixel(0, 0);
        assert!(pixel[0] > pixel[2]); // sepia applied after resize
    }

    #[test]
    fn test_format_only_pipeline_keeps_pixels() {
        let mut pipeline = ProcessingPipeline::new();
        pipeline.add_operations(vec![Operation::Format(OutputFormat::Png)]);
        let img = sample_image();
        let out = pipeline.execute(img.clone()).unwrap();
        assert_eq!(out.to_rgba8().as_raw(), img.to_rgba8().as_raw());
    }

    #[test]
    fn test_failing_operation_aborts_pipeline() {
        let mut pipeline = ProcessingPipeline::new();
        pipeline.add_operations(vec![Operation::Blur { sigma: -2.0 }, Operation::Sepia]);
        let result = pipeline.execute(sample_image());
        assert!(matches!(result, Err(TransformError::Operation { .. })));
    }

    #[test]
    fn test_add_operations_appends() {
        let mut pipeline = ProcessingPipeline::new();
        pipeline.add_operations(vec![Operation::Sepia]);
        pipeline.add_operations(vec![Operation::Blur { sigma: 1.0 }]);
        assert_eq!(pipeline.len(), 2);
    }
}
