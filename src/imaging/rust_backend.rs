//! Pure Rust image processing backend — zero external dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header read, no full decode) |
//! | Decode (JPEG, PNG) | `image` crate (pure Rust decoders) |
//! | Resample | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Crop to canvas | `image::DynamicImage::crop_imm` |
//! | Encode → JPEG | `JpegEncoder::new_with_quality` |
//! | Encode → PNG | `PngEncoder` (default compression; no 0–100 quality knob) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ThumbnailParams;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Extensions whose decoders and encoders are compiled in.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Whether the given extension (without dot) has a working codec compiled in.
pub fn is_supported_extension(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(ext))
}

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Save a DynamicImage to the given path, inferring the format from the
/// extension. Deletes an existing file first so formats sensitive to
/// truncate-and-append semantics never see a partial overwrite.
///
/// The quality hint applies to JPEG only; PNG is lossless and uses the
/// encoder's default compression.
fn save_image(img: &DynamicImage, path: &Path, quality: u8) -> Result<(), BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if path.exists() {
        std::fs::remove_file(path).map_err(BackendError::Io)?;
    }

    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);

    match ext.as_str() {
        "jpg" | "jpeg" => img
            .write_with_encoder(JpegEncoder::new_with_quality(writer, quality))
            .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e))),
        "png" => img
            .write_with_encoder(PngEncoder::new(writer))
            .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e))),
        other => Err(BackendError::ProcessingFailed(format!(
            "Unsupported output format: {}",
            other
        ))),
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let spec = params.spec;

        // Resample to the draw size, then clip to the canvas. In fit mode
        // the canvas equals the draw size and the crop is a no-op.
        let drawn = img.resize_exact(spec.draw_width, spec.draw_height, FilterType::Lanczos3);
        let canvas = if spec.draw_width == spec.canvas_width
            && spec.draw_height == spec.canvas_height
        {
            drawn
        } else {
            // Crop-mode offsets are ≤ 0: the draw overflows the canvas and
            // the visible window starts at -offset inside the draw.
            drawn.crop_imm(
                (-spec.offset_x) as u32,
                (-spec.offset_y) as u32,
                spec.canvas_width,
                spec.canvas_height,
            )
        };

        save_image(&canvas, &params.output, params.quality)
    }
}
