//! Operation factory: options to ordered operation list.

use photogal_core::ImageProcessingOptions;

use crate::format::OutputFormat;
use crate::operation::Operation;

/// Builds the operation list for one transform call.
///
/// Emission order is fixed: Resize, Format, Sepia, Blur. A field that is
/// unset simply drops its operation; nothing here validates or fails.
pub struct OperationFactory;

impl OperationFactory {
    pub fn create(options: &ImageProcessingOptions) -> Vec<Operation> {
        let mut operations = Vec::new();

        if let Some(width) = options.resize_width {
            let height = options.resize_height.unwrap_or(width);
            operations.push(Operation::Resize { width, height });
        }

        if let Some(format) = options.output_format.as_deref() {
            if !format.trim().is_empty() {
                operations.push(Operation::Format(OutputFormat::resolve(Some(format))));
            }
        }

        if options.apply_sepia {
            operations.push(Operation::Sepia);
        }

        if let Some(sigma) = options.blur_amount {
            operations.push(Operation::Blur { sigma });
        }

        operations
    }
}
