//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the gallery needs:
//! identify (read dimensions) and thumbnail (decode, resample, encode).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust via the
//! `image` crate, statically linked. Tests use the recording `MockBackend`
//! defined in this module's test scope.

use super::params::ThumbnailParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Both operations take paths, not pixel buffers: raster data is acquired
/// and released entirely within one call, on every exit path.
pub trait ImageBackend: Sync {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Produce a thumbnail raster per the params' canvas spec.
    ///
    /// Must replace (delete, then write) any existing file at the output
    /// path rather than overwriting in place.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::calculations::CanvasSpec;
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: Mutex<Vec<Dimensions>>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Thumbnail {
            source: String,
            output: String,
            spec: CanvasSpec,
            quality: u8,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Results are popped per identify call, so push them in reverse
        /// of the expected call order.
        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: Mutex::new(dims),
                operations: Mutex::new(Vec::new()),
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        pub fn thumbnail_ops(&self) -> usize {
            self.get_operations()
                .iter()
                .filter(|op| matches!(op, RecordedOp::Thumbnail { .. }))
                .count()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.identify_results
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| BackendError::ProcessingFailed("No mock dimensions".to_string()))
        }

        fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Thumbnail {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                spec: params.spec,
                quality: params.quality,
            });
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_identify_without_results_errors() {
        let backend = MockBackend::new();
        assert!(backend.identify(Path::new("/test/image.jpg")).is_err());
    }

    #[test]
    fn mock_records_thumbnail() {
        let backend = MockBackend::new();
        let spec = CanvasSpec {
            canvas_width: 140,
            canvas_height: 93,
            draw_width: 186,
            draw_height: 93,
            offset_x: -23,
            offset_y: 0,
        };

        backend
            .thumbnail(&ThumbnailParams {
                source: "/photos/a.jpg".into(),
                output: "/photos/a_thumb.jpg".into(),
                spec,
                quality: 75,
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Thumbnail { quality: 75, spec: s, .. } if *s == spec
        ));
    }
}
