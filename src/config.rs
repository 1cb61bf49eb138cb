//! Gallery configuration for the CLI.
//!
//! Handles loading and validating `gallery.toml`. Config files are sparse —
//! every option is optional and falls back to the stock default:
//!
//! ```toml
//! url_base = "/photos"
//!
//! [thumbnails]
//! width = 200
//! crop = false
//! ```
//!
//! The `[thumbnails]` table deserializes straight into
//! [`ThumbnailPolicy`], so it accepts exactly the five policy keys
//! (`width`, `height`, `crop`, `quality`, `forceDimensions`) and ignores
//! anything else.
//!
//! Validation is a CLI-level hardening: the library itself accepts any
//! policy values, but a config file with a zero dimension or an
//! out-of-range quality is rejected here before a build starts.

use crate::gallery::{DEFAULT_ITEM_TEMPLATE, DEFAULT_WRAP_TEMPLATE, Gallery};
use crate::policy::ThumbnailPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// URL prefix for generated `<a>`/`<img>` attributes.
    pub url_base: String,
    /// The five thumbnail options.
    pub thumbnails: ThumbnailPolicy,
    /// Wrapper and per-item CSS class strings.
    pub classes: ClassConfig,
    /// Wrapper and per-item template strings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassConfig {
    pub wrap: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub wrap: String,
    pub item: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            url_base: String::new(),
            thumbnails: ThumbnailPolicy::default(),
            classes: ClassConfig::default(),
            templates: TemplateConfig::default(),
        }
    }
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            wrap: "gallery".to_string(),
            item: "gallery-item".to_string(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            wrap: DEFAULT_WRAP_TEMPLATE.to_string(),
            item: DEFAULT_ITEM_TEMPLATE.to_string(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thumbnails.width == 0 || self.thumbnails.height == 0 {
            return Err(ConfigError::Validation(
                "thumbnails.width and thumbnails.height must be non-zero".into(),
            ));
        }
        if self.thumbnails.quality > 100 {
            return Err(ConfigError::Validation(
                "thumbnails.quality must be 0-100".into(),
            ));
        }
        Ok(())
    }

    /// Construct a [`Gallery`] over `source` configured by this config.
    pub fn build_gallery(&self, source: &Path) -> Gallery {
        let mut gallery = Gallery::with_policy(source, &self.url_base, self.thumbnails);
        gallery.wrap_template = self.templates.wrap.clone();
        gallery.item_template = self.templates.item.clone();
        gallery.wrap_class = self.classes.wrap.clone();
        gallery.item_class = self.classes.item.clone();
        gallery
    }
}

/// Load config from `path`, falling back to defaults if no file exists.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    if !path.exists() {
        return Ok(GalleryConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: GalleryConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A fully documented `gallery.toml` with every option at its default.
pub fn stock_config_toml() -> String {
    format!(
        r#"# thumbgal configuration. All options are optional - defaults shown below.

# URL prefix for generated <a>/<img> attributes: {{url_base}}/photo.jpg
url_base = ""

[thumbnails]
width = 140             # Target box width in pixels
height = 93             # Target box height in pixels
crop = true             # Fill the box exactly, cropping overflow; false = fit inside
quality = 75            # Encoder quality hint, 0-100 (JPEG only; PNG ignores it)
forceDimensions = false # Disable orientation-based width/height swapping

[classes]
wrap = "gallery"        # Substituted for {{{{wrapper_class}}}}
item = "gallery-item"   # Substituted for {{{{content_class}}}}

# Templates are literal strings. Item placeholders: {{{{content_class}}}},
# {{{{big_image}}}}, {{{{thumb_image}}}}, {{{{image_name}}}}. Wrap placeholders:
# {{{{wrapper_class}}}}, {{{{content}}}}. Unknown placeholders pass through verbatim.
[templates]
wrap = '''
{wrap}'''
item = '''
{item}'''
"#,
        wrap = DEFAULT_WRAP_TEMPLATE,
        item = DEFAULT_ITEM_TEMPLATE,
    )
}
