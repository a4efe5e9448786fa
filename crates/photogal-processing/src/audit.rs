//! Filter-record projection for the upload audit trail.
//!
//! The projection uses the exact same presence checks as
//! [`OperationFactory`](crate::factory::OperationFactory): a record exists
//! if and only if the factory would emit the corresponding operation.
//! Changing one side without the other corrupts the audit trail, which is
//! why the lock-step test below walks both over the same options grid.

use photogal_core::{FilterRecord, ImageProcessingOptions};

/// Project the requested transformations into persisted audit rows.
pub fn project_filters(options: &ImageProcessingOptions) -> Vec<FilterRecord> {
    let mut records = Vec::new();

    if let Some(width) = options.resize_width {
        let height = options.resize_height.unwrap_or(width);
        records.push(FilterRecord::new("Resize", format!("{width}x{height}")));
    }

    if let Some(format) = options.output_format.as_deref() {
        if !format.trim().is_empty() {
            // Recorded raw, as supplied by the caller
            records.push(FilterRecord::new("Format", format));
        }
    }

    if options.apply_sepia {
        records.push(FilterRecord::new("Sepia", "true"));
    }

    if let Some(sigma) = options.blur_amount {
        records.push(FilterRecord::new("Blur", sigma.to_string()));
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::OperationFactory;

    #[test]
    fn test_empty_options_project_nothing() {
        assert!(project_filters(&ImageProcessingOptions::default()).is_empty());
    }

    #[test]
    fn test_projection_values() {
        let options = ImageProcessingOptions {
            resize_width: Some(400),
            resize_height: None,
            output_format: Some("bmp".to_string()),
            apply_sepia: true,
            blur_amount: Some(2.5),
        };
        let records = project_filters(&options);
        assert_eq!(
            records,
            vec![
                FilterRecord::new("Resize", "400x400"),
                FilterRecord::new("Format", "bmp"),
                FilterRecord::new("Sepia", "true"),
                FilterRecord::new("Blur", "2.5"),
            ]
        );
    }

    #[test]
    fn test_explicit_height_is_recorded() {
        let options = ImageProcessingOptions {
            resize_width: Some(640),
            resize_height: Some(480),
            ..Default::default()
        };
        let records = project_filters(&options);
        assert_eq!(records, vec![FilterRecord::new("Resize", "640x480")]);
    }

    #[test]
    fn test_format_is_recorded_raw() {
        let options = ImageProcessingOptions {
            output_format: Some("  PNG ".to_string()),
            ..Default::default()
        };
        let records = project_filters(&options);
        assert_eq!(records, vec![FilterRecord::new("Format", "  PNG ")]);
    }

    #[test]
    fn test_projection_stays_in_lock_step_with_factory() {
        // Walk a grid of option combinations; for each one, the record types
        // must match the emitted operation names one-for-one, in order.
        for resize_width in [None, Some(400)] {
            for resize_height in [None, Some(300)] {
                for output_format in [None, Some(""), Some("png"), Some("webp")] {
                    for apply_sepia in [false, true] {
                        for blur_amount in [None, Some(1.5)] {
                            let options = ImageProcessingOptions {
                                resize_width,
                                resize_height,
                                output_format: output_format.map(str::to_string),
                                apply_sepia,
                                blur_amount,
                            };
                            let record_types: Vec<_> = project_filters(&options)
                                .into_iter()
                                .map(|r| r.filter_type)
                                .collect();
                            let operation_names: Vec<_> = OperationFactory::create(&options)
                                .iter()
                                .map(|op| op.name().to_string())
                                .collect();
                            assert_eq!(record_types, operation_names, "options: {options:?}");
                        }
                    }
                }
            }
        }
    }
}
