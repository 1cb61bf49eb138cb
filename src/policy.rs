//! Thumbnail generation policy.
//!
//! [`ThumbnailPolicy`] holds the five recognized thumbnail options. It is a
//! plain struct with public fields — the set of options is fixed and known
//! at compile time, so there is no name-based dispatch anywhere.
//!
//! ## Partial Construction
//!
//! The policy deserializes from a sparse mapping: absent keys take the
//! documented defaults and unknown keys are ignored, so a config file (or a
//! JSON snippet) only needs to name the values it overrides:
//!
//! ```toml
//! width = 200
//! crop = false
//! ```
//!
//! The library performs no range validation — a zero `width` is accepted
//! here and produces a degenerate thumbnail. The CLI config layer
//! ([`crate::config`]) rejects such values before a build starts.

use serde::{Deserialize, Serialize};

/// The five thumbnail-generation options.
///
/// | Option | Default | Meaning |
/// |--------|---------|---------|
/// | `width` | 140 | Target box width in pixels |
/// | `height` | 93 | Target box height in pixels |
/// | `crop` | true | Fill the box exactly, cropping overflow; false = fit inside it |
/// | `quality` | 75 | Encoder quality hint, 0–100 (JPEG only; PNG ignores it) |
/// | `forceDimensions` | false | Disable orientation-based width/height swapping |
///
/// With `crop = false` the output dimensions generally differ from
/// `width`×`height`: the image is scaled to fit inside the box with its full
/// content and aspect ratio preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailPolicy {
    pub width: u32,
    pub height: u32,
    pub crop: bool,
    pub quality: u8,
    #[serde(rename = "forceDimensions")]
    pub force_dimensions: bool,
}

impl Default for ThumbnailPolicy {
    fn default() -> Self {
        Self {
            width: 140,
            height: 93,
            crop: true,
            quality: 75,
            force_dimensions: false,
        }
    }
}
