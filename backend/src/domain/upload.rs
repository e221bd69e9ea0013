//! Metadata describing an uploaded image.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const BYTES_PER_KB: f64 = 1024.0;

/// Name, declared type and size of an uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageMetadata {
    #[schema(example = "cat.png")]
    pub filename: Option<String>,
    #[schema(example = "image/png")]
    pub content_type: Option<String>,
    /// Size in kilobytes rounded to two decimal places.
    #[schema(example = 12.35)]
    pub size_kb: f64,
}

impl ImageMetadata {
    /// Describe an upload of `len` bytes.
    ///
    /// # Examples
    /// ```
    /// use people_api::domain::ImageMetadata;
    ///
    /// let meta = ImageMetadata::new(Some("cat.png".into()), Some("image/png".into()), 2048);
    /// assert_eq!(meta.size_kb, 2.0);
    /// ```
    pub fn new(filename: Option<String>, content_type: Option<String>, len: usize) -> Self {
        Self {
            filename,
            content_type,
            size_kb: kilobytes(len),
        }
    }
}

/// Convert a byte count to kilobytes rounded to two decimal places.
pub fn kilobytes(len: usize) -> f64 {
    let kb = len as f64 / BYTES_PER_KB;
    (kb * 100.0).round() / 100.0
}
