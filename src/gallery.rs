//! Gallery assembly: discovery, template state, and the build loop.
//!
//! A [`Gallery`] enumerates its source directory exactly once, at
//! construction. Templates, CSS classes, and the thumbnail policy are plain
//! public fields — pure presentation state that can be swapped at any time
//! without touching the filesystem or re-triggering discovery.
//!
//! ## Discovery Rules
//!
//! - Files only, directly in the source directory (not recursive).
//! - Extension must be `png`, `jpg`, or `jpeg`, case-insensitive.
//! - Base names ending in `_thumb` (case-insensitive) are excluded so
//!   generated thumbnails are never re-discovered as sources.
//! - A missing or unreadable directory yields an empty gallery, not an
//!   error.
//! - Assets are sorted by lowercased base name, making build output
//!   deterministic across filesystems.

use crate::asset::{self, ImageAsset, ThumbStatus};
use crate::imaging::ImageBackend;
use crate::policy::ThumbnailPolicy;
use crate::template::substitute;
use std::fs;
use std::path::Path;

/// Default wrapper markup. Placeholders: `{{wrapper_class}}`, `{{content}}`.
pub const DEFAULT_WRAP_TEMPLATE: &str = "<ul class=\"{{wrapper_class}}\">\n  {{content}}\n</ul>";

/// Default per-image markup. Placeholders: `{{content_class}}`,
/// `{{big_image}}`, `{{thumb_image}}`, `{{image_name}}`.
pub const DEFAULT_ITEM_TEMPLATE: &str =
    "<li class=\"{{content_class}}\">\n  <a href=\"{{big_image}}\"><img src=\"{{thumb_image}}\"></a>\n</li>";

/// Per-asset outcome of a build, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetOutcome {
    pub name: String,
    pub status: ThumbStatus,
}

/// Result of [`Gallery::build_report`]: the rendered fragment plus what
/// happened to each asset's thumbnail.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub html: String,
    pub outcomes: Vec<AssetOutcome>,
}

/// Scan `dir` for eligible source images.
///
/// See the [module docs](self) for the filtering and ordering rules.
pub fn discover(dir: &Path, url_base: &str) -> Vec<ImageAsset> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut assets: Vec<ImageAsset> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter_map(|p| split_image_name(&p))
        .map(|(name, ext)| ImageAsset::new(dir, url_base, name, ext))
        .collect();

    assets.sort_by(asset::cmp_by_name);
    assets
}

/// Split a path into (base name, extension) if it names a source image.
fn split_image_name(path: &Path) -> Option<(String, String)> {
    let ext = path.extension()?.to_str()?;
    if !matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg") {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || stem.to_ascii_lowercase().ends_with("_thumb") {
        return None;
    }
    Some((stem.to_string(), ext.to_string()))
}

/// A gallery build context: discovered assets plus presentation state.
pub struct Gallery {
    assets: Vec<ImageAsset>,
    /// Thumbnail geometry and quality settings, replaceable wholesale.
    pub policy: ThumbnailPolicy,
    pub wrap_template: String,
    pub item_template: String,
    pub wrap_class: String,
    pub item_class: String,
}

impl Gallery {
    /// Discover images under `dir` with the default policy and templates.
    ///
    /// `url_base` prefixes every generated URL (`{url_base}/{name}.{ext}`).
    pub fn new(dir: &Path, url_base: &str) -> Self {
        Self::with_policy(dir, url_base, ThumbnailPolicy::default())
    }

    pub fn with_policy(dir: &Path, url_base: &str, policy: ThumbnailPolicy) -> Self {
        Self {
            assets: discover(dir, url_base),
            policy,
            wrap_template: DEFAULT_WRAP_TEMPLATE.to_string(),
            item_template: DEFAULT_ITEM_TEMPLATE.to_string(),
            wrap_class: "gallery".to_string(),
            item_class: "gallery-item".to_string(),
        }
    }

    /// The discovered assets, in render order.
    pub fn assets(&self) -> &[ImageAsset] {
        &self.assets
    }

    /// Render the gallery fragment, generating missing thumbnails.
    ///
    /// With `clear_cache` every thumbnail is regenerated; otherwise an
    /// existing thumbnail file is trusted as-is. Thumbnail failures never
    /// fail the build — the item still renders, pointing at a thumbnail URL
    /// that may not exist on disk. Use [`Gallery::build_report`] to see
    /// per-asset outcomes.
    pub fn build(&self, backend: &impl ImageBackend, clear_cache: bool) -> String {
        self.build_report(backend, clear_cache).html
    }

    /// Like [`Gallery::build`], also reporting each asset's [`ThumbStatus`].
    pub fn build_report(&self, backend: &impl ImageBackend, clear_cache: bool) -> BuildReport {
        // Snapshot for the duration of the render; the policy is Copy.
        let policy = self.policy;

        let mut content = String::new();
        let mut outcomes = Vec::with_capacity(self.assets.len());

        for asset in &self.assets {
            let status = if clear_cache || !asset.has_cached_thumbnail() {
                asset.generate_thumbnail(backend, &policy)
            } else {
                ThumbStatus::Cached
            };
            outcomes.push(AssetOutcome {
                name: asset.base_name().to_string(),
                status,
            });

            content.push_str(&substitute(
                &self.item_template,
                &[
                    ("{{content_class}}", &self.item_class),
                    ("{{big_image}}", &asset.source_url()),
                    ("{{thumb_image}}", &asset.thumb_url()),
                    ("{{image_name}}", asset.base_name()),
                ],
            ));
        }

        let html = substitute(
            &self.wrap_template,
            &[
                ("{{wrapper_class}}", &self.wrap_class),
                ("{{content}}", &content),
            ],
        );

        BuildReport { html, outcomes }
    }
}
