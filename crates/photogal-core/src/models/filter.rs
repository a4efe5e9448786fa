use serde::{Deserialize, Serialize};

/// One persisted audit row documenting a transformation applied to a photo.
///
/// Rows are derived from the same options value that drives the pipeline;
/// a row exists exactly when the corresponding operation was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRecord {
    pub filter_type: String,
    pub filter_value: String,
}

impl FilterRecord {
    pub fn new(filter_type: impl Into<String>, filter_value: impl Into<String>) -> Self {
        Self {
            filter_type: filter_type.into(),
            filter_value: filter_value.into(),
        }
    }
}
