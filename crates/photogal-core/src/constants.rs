//! Application-wide constants.

/// Edge length of the square thumbnail derived for stored photos.
/// Thumbnails are cropped to fill, so both dimensions always equal this.
pub const THUMBNAIL_SIZE: u32 = 300;

/// Format used when the caller requests none, or an unrecognized one.
pub const DEFAULT_OUTPUT_FORMAT: &str = "jpg";
