//! One discovered source image and its derived thumbnail location.
//!
//! An [`ImageAsset`] is created once during directory discovery and its
//! identity (directory, URL base, base name, extension) never changes. The
//! thumbnail *file* is the only thing that mutates — created, overwritten,
//! or deleted-and-recreated by [`ImageAsset::generate_thumbnail`], never by
//! construction.
//!
//! All paths and URLs are derived, not stored:
//! `{directory|url_base}/{base_name}[_thumb].{extension}`, with the
//! extension's original case preserved.

use crate::imaging::{ImageBackend, ThumbnailParams, compute_target_canvas, is_supported_extension};
use crate::policy::ThumbnailPolicy;
use std::path::PathBuf;

/// Outcome of one thumbnail generation attempt.
///
/// Failures are reported, never raised: a gallery build records the status
/// per asset and renders the item regardless, so a corrupt image degrades to
/// a link whose thumbnail may not exist on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbStatus {
    /// A new thumbnail file was written.
    Generated,
    /// An existing thumbnail was reused; no decode happened.
    Cached,
    /// The extension has no compiled-in codec; nothing was written.
    SkippedUnsupported,
    /// Decode or encode failed; nothing usable was written.
    Failed(String),
}

/// One source image in a gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    directory: PathBuf,
    url_base: String,
    base_name: String,
    extension: String,
}

impl ImageAsset {
    pub fn new(
        directory: impl Into<PathBuf>,
        url_base: impl Into<String>,
        base_name: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            url_base: url_base.into(),
            base_name: base_name.into(),
            extension: extension.into(),
        }
    }

    /// The image name without extension, as discovered.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The file extension as discovered (case preserved).
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Filesystem path of the source image.
    pub fn source_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.base_name, self.extension))
    }

    /// Filesystem path of the (possibly not yet generated) thumbnail.
    pub fn thumb_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}_thumb.{}", self.base_name, self.extension))
    }

    /// URL of the source image, suitable for an `href`/`src` attribute.
    pub fn source_url(&self) -> String {
        format!("{}/{}.{}", self.url_base, self.base_name, self.extension)
    }

    /// URL of the thumbnail.
    pub fn thumb_url(&self) -> String {
        format!("{}/{}_thumb.{}", self.url_base, self.base_name, self.extension)
    }

    /// Whether a thumbnail file exists. Existence is the whole cache
    /// contract — content and freshness are never checked.
    pub fn has_cached_thumbnail(&self) -> bool {
        self.thumb_path().exists()
    }

    /// Generate (or regenerate) this asset's thumbnail.
    ///
    /// Reads the source dimensions, computes the crop-or-fit canvas per the
    /// policy, and hands the raster work to the backend, which replaces any
    /// existing thumbnail file. Unsupported extensions and decode failures
    /// produce a non-`Generated` status instead of an error.
    pub fn generate_thumbnail(
        &self,
        backend: &impl ImageBackend,
        policy: &ThumbnailPolicy,
    ) -> ThumbStatus {
        if !is_supported_extension(&self.extension) {
            return ThumbStatus::SkippedUnsupported;
        }

        let source = self.source_path();
        let dims = match backend.identify(&source) {
            Ok(d) => d,
            Err(e) => return ThumbStatus::Failed(e.to_string()),
        };

        let params = ThumbnailParams {
            source,
            output: self.thumb_path(),
            spec: compute_target_canvas((dims.width, dims.height), policy),
            quality: policy.quality,
        };

        match backend.thumbnail(&params) {
            Ok(()) => ThumbStatus::Generated,
            Err(e) => ThumbStatus::Failed(e.to_string()),
        }
    }
}

/// Compare assets by lowercased base name, for stable discovery order.
pub(crate) fn cmp_by_name(a: &ImageAsset, b: &ImageAsset) -> std::cmp::Ordering {
    a.base_name
        .to_lowercase()
        .cmp(&b.base_name.to_lowercase())
}
