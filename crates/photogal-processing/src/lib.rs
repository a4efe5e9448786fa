//! Photogal Image Processing Library
//!
//! This crate implements the transform pipeline used by the photo gallery:
//! a declarative options value is turned into an ordered list of operations
//! (resize, format selection, sepia, blur) which are applied to the decoded
//! image before it is re-encoded, optionally together with a fixed-size
//! cropped thumbnail for storage.

pub mod audit;
pub mod error;
pub mod factory;
pub mod filters;
pub mod format;
pub mod operation;
pub mod pipeline;
pub mod resize;
pub mod service;
pub mod template;

// Re-export commonly used types
pub use audit::project_filters;
pub use error::TransformError;
pub use factory::OperationFactory;
pub use filters::ImageFilters;
pub use format::OutputFormat;
pub use operation::Operation;
pub use pipeline::ProcessingPipeline;
pub use resize::ImageResize;
pub use service::{ImageTransformService, PhotoTransformService};
pub use template::{EncodedImage, TransformResult, TransformTemplate};
