use image::ImageFormat;

/// Output format for encoded images.
///
/// Resolution from the caller-supplied string never fails: anything that is
/// not exactly "png" or "bmp" after trimming and lowercasing - including an
/// absent or blank value - falls back to JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
    Bmp,
}

impl OutputFormat {
    /// Resolve the requested format string. Pure and infallible.
    pub fn resolve(format: Option<&str>) -> Self {
        match format.map(|f| f.trim().to_ascii_lowercase()).as_deref() {
            Some("png") => OutputFormat::Png,
            Some("bmp") => OutputFormat::Bmp,
            _ => OutputFormat::Jpeg,
        }
    }

    /// File extension, dot included.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => ".jpg",
            OutputFormat::Png => ".png",
            OutputFormat::Bmp => ".bmp",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::Bmp => "image/bmp",
        }
    }

    pub fn to_image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
        }
    }
}
