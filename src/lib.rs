//! # thumbgal
//!
//! A minimal HTML thumbnail gallery generator. Point it at a folder of
//! images and it produces an HTML fragment of linked thumbnails, generating
//! and caching the thumbnail files alongside their sources.
//!
//! # How It Works
//!
//! ```text
//! 1. Discover   photos/         →  Vec<ImageAsset>   (read_dir, filtered, sorted)
//! 2. Thumbnail  photo.jpg       →  photo_thumb.jpg   (crop-or-fit, cached)
//! 3. Render     templates       →  HTML fragment     (literal token substitution)
//! ```
//!
//! A [`Gallery`](gallery::Gallery) enumerates the source directory once at
//! construction. Each eligible file (`*.png`, `*.jpg`, `*.jpeg`, skipping
//! generated `*_thumb.*` files) becomes an [`ImageAsset`](asset::ImageAsset).
//! [`Gallery::build`](gallery::Gallery::build) walks the assets in order,
//! regenerates any thumbnail that is missing (or all of them when the cache
//! is cleared), renders each asset through the item template, and wraps the
//! concatenation in the wrap template.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`policy`] | The five thumbnail options: width, height, crop, quality, forceDimensions |
//! | [`imaging`] | Geometry math, the [`ImageBackend`](imaging::ImageBackend) seam, and the `image`-crate backend |
//! | [`asset`] | One discovered image: derived paths/URLs, cache check, thumbnail generation |
//! | [`gallery`] | Discovery, template state, and the `build` entry point |
//! | [`template`] | `{{token}}` substitution — literal replacement, unknown tokens left verbatim |
//! | [`config`] | `gallery.toml` loading and validation for the CLI |
//! | [`output`] | CLI output formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## String Templates Over a Template Engine
//!
//! Rendering is deliberately dumb: four item placeholders, two wrap
//! placeholders, replaced as literal tokens. Unknown placeholders pass
//! through untouched, so user templates can carry tokens for a downstream
//! processor. No escaping, no expressions, no template files to ship.
//!
//! ## Existence-Only Thumbnail Cache
//!
//! A thumbnail is considered valid iff its file exists. Editing a source
//! image does not invalidate its thumbnail; pass `clear_cache = true` to
//! force regeneration. This keeps repeat builds free of any decoding work.
//!
//! ## Degrade, Don't Fail
//!
//! A missing source directory yields an empty gallery. A corrupt or
//! unsupported image is skipped with a per-asset
//! [`ThumbStatus`](asset::ThumbStatus) — the fragment still renders, and
//! `build` never returns an error. Callers needing strictness can inspect
//! [`Gallery::build_report`](gallery::Gallery::build_report).
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, Lanczos3 resampling, and encoding all go through the `image`
//! crate — no ImageMagick, no system dependencies. The pixel work sits
//! behind the [`ImageBackend`](imaging::ImageBackend) trait so collection
//! and rendering logic is tested against a recording mock.

pub mod asset;
pub mod config;
pub mod gallery;
pub mod imaging;
pub mod output;
pub mod policy;
pub mod template;
