//! Parameter types for thumbnail operations.
//!
//! [`ThumbnailParams`] describes *what* raster to produce, not *how*. It is
//! the interface between [`asset`](crate::asset) (which decides which
//! thumbnails to create and with what geometry) and the
//! [`backend`](super::backend) (which does the actual pixel work). The split
//! lets tests swap in a recording mock without touching geometry logic.

use super::calculations::CanvasSpec;
use std::path::PathBuf;

/// Full specification for one thumbnail raster operation.
///
/// The backend decodes `source`, allocates a canvas per `spec`, resamples
/// the source into it at the spec's draw size and offset, and encodes the
/// result to `output` with the `quality` hint (JPEG only; PNG has no 0–100
/// quality knob).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub spec: CanvasSpec,
    pub quality: u8,
}
