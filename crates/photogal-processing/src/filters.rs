use image::{imageops, DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Pixel-level filter operations.
pub struct ImageFilters;

impl ImageFilters {
    /// Apply sepia tone effect
    pub fn apply_sepia(img: DynamicImage) -> DynamicImage {
        let (width, height) = img.dimensions();
        let rgba8 = img.to_rgba8();
        let mut sepia_img = RgbaImage::new(width, height);

        for (x, y, pixel) in rgba8.enumerate_pixels() {
            let Rgba([r, g, b, a]) = *pixel;

            // Sepia formula
            let tr = (0.393 * r as f32 + 0.769 * g as f32 + 0.189 * b as f32).min(255.0) as u8;
            let tg = (0.349 * r as f32 + 0.686 * g as f32 + 0.168 * b as f32).min(255.0) as u8;
            let tb = (0.272 * r as f32 + 0.534 * g as f32 + 0.131 * b as f32).min(255.0) as u8;

            sepia_img.put_pixel(x, y, Rgba([tr, tg, tb, a]));
        }

        DynamicImage::ImageRgba8(sepia_img)
    }

    /// Apply Gaussian blur with the given sigma.
    pub fn apply_blur(img: DynamicImage, sigma: f32) -> DynamicImage {
        DynamicImage::ImageRgba8(imageops::blur(&img.to_rgba8(), sigma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sepia_warms_gray() {
        let img =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([128, 128, 128, 255])));
        let sepia = ImageFilters::apply_sepia(img);
        let pixel = *sepia.to_rgba8().get_pixel(5, 5);
        // Sepia pushes red above green above blue
        assert!(pixel[0] > pixel[1]);
        assert!(pixel[1] > pixel[2]);
    }

    #[test]
    fn test_sepia_clamps_white() {
        let img =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])));
        let sepia = ImageFilters::apply_sepia(img);
        let pixel = *sepia.to_rgba8().get_pixel(0, 0);
        assert_eq!(pixel[0], 255); // 1.351 * 255 clamped
        assert!(pixel[2] < 255);
    }

    #[test]
    fn test_sepia_preserves_alpha_and_dimensions() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 6, Rgba([10, 200, 40, 128])));
        let sepia = ImageFilters::apply_sepia(img);
        assert_eq!(sepia.dimensions(), (8, 6));
        assert_eq!(sepia.to_rgba8().get_pixel(0, 0)[3], 128);
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
        let blurred = ImageFilters::apply_blur(img, 2.0);
        assert_eq!(blurred.dimensions(), (10, 10));
    }

    #[test]
    fn test_blur_softens_edges() {
        // Half black, half white: the boundary column must end up between the two
        let mut img = RgbaImage::new(20, 20);
        for y in 0..20 {
            for x in 0..20 {
                let v = if x < 10 { 0 } else { 255 };
                img.put_pixel(x, y, Rgba([v, v, v, 255]));
            }
        }
        let blurred = ImageFilters::apply_blur(DynamicImage::ImageRgba8(img), 2.0);
        let edge = *blurred.to_rgba8().get_pixel(10, 10);
        assert!(edge[0] > 0 && edge[0] < 255);
    }
}
