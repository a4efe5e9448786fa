use image::{DynamicImage, GenericImageView};

/// Image resize operations.
pub struct ImageResize;

impl ImageResize {
    /// Calculate dimensions that fit inside the target box while keeping
    /// the aspect ratio. Never returns a zero dimension.
    pub fn fit_dimensions(
        orig_width: u32,
        orig_height: u32,
        max_width: u32,
        max_height: u32,
    ) -> (u32, u32) {
        let width_ratio = max_width as f32 / orig_width as f32;
        let height_ratio = max_height as f32 / orig_height as f32;
        let scale = width_ratio.min(height_ratio);

        let w = (orig_width as f32 * scale).round() as u32;
        let h = (orig_height as f32 * scale).round() as u32;
        (w.max(1), h.max(1))
    }

    /// Select appropriate filter type based on resize ratio
    pub fn select_filter(
        orig_width: u32,
        orig_height: u32,
        new_width: u32,
        new_height: u32,
    ) -> image::imageops::FilterType {
        let width_ratio = orig_width as f32 / new_width as f32;
        let height_ratio = orig_height as f32 / new_height as f32;
        let max_ratio = width_ratio.max(height_ratio);

        if max_ratio > 2.0 {
            image::imageops::FilterType::Triangle
        } else if max_ratio > 1.5 {
            image::imageops::FilterType::CatmullRom
        } else {
            image::imageops::FilterType::Lanczos3
        }
    }

    /// Resize so the result fits inside `max_width` x `max_height`,
    /// preserving aspect ratio. The bound is a maximum, not an exact size.
    pub fn max_fit(img: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        let (target_width, target_height) =
            Self::fit_dimensions(orig_width, orig_height, max_width, max_height);
        let filter = Self::select_filter(orig_width, orig_height, target_width, target_height);
        img.resize_exact(target_width, target_height, filter)
    }

    /// Resize to exactly `width` x `height`, scaling to cover the target and
    /// center-cropping the overflow.
    pub fn crop_to_fill(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        let filter = Self::select_filter(orig_width, orig_height, width, height);
        img.resize_to_fill(width, height, filter)
    }
}
