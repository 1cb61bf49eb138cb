//! CLI output formatting.
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Build
//!
//! ```text
//! 001 alps: generated
//! 002 beach: cached
//! 003 corrupt: failed (Processing failed: ...)
//!
//! 2 thumbnails ok, 1 failed
//! ```
//!
//! ## List
//!
//! ```text
//! 001 alps
//!     Source: alps.jpg
//!     Thumb:  alps_thumb.jpg (cached)
//! 002 beach
//!     Source: beach.jpg
//!     Thumb:  beach_thumb.jpg (missing)
//! ```

use crate::asset::{ImageAsset, ThumbStatus};
use crate::gallery::BuildReport;
use serde::Serialize;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Human-readable label for a thumbnail outcome.
fn status_label(status: &ThumbStatus) -> String {
    match status {
        ThumbStatus::Generated => "generated".to_string(),
        ThumbStatus::Cached => "cached".to_string(),
        ThumbStatus::SkippedUnsupported => "skipped (no codec for extension)".to_string(),
        ThumbStatus::Failed(reason) => format!("failed ({})", reason),
    }
}

/// Format per-asset thumbnail outcomes plus a summary line.
pub fn format_build_report(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, outcome) in report.outcomes.iter().enumerate() {
        lines.push(format!(
            "{} {}: {}",
            format_index(i + 1),
            outcome.name,
            status_label(&outcome.status)
        ));
    }

    let ok = report
        .outcomes
        .iter()
        .filter(|o| matches!(o.status, ThumbStatus::Generated | ThumbStatus::Cached))
        .count();
    let failed = report.outcomes.len() - ok;

    if !report.outcomes.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("{} thumbnails ok, {} failed", ok, failed));
    lines
}

/// Format the discovered-asset inventory.
pub fn format_asset_list(assets: &[ImageAsset]) -> Vec<String> {
    if assets.is_empty() {
        return vec!["No images found".to_string()];
    }

    let mut lines = Vec::new();
    for (i, asset) in assets.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), asset.base_name()));
        lines.push(format!(
            "    Source: {}.{}",
            asset.base_name(),
            asset.extension()
        ));
        let cache = if asset.has_cached_thumbnail() {
            "cached"
        } else {
            "missing"
        };
        lines.push(format!(
            "    Thumb:  {}_thumb.{} ({})",
            asset.base_name(),
            asset.extension(),
            cache
        ));
    }
    lines
}

/// One row of the JSON inventory emitted by `list --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRecord {
    pub name: String,
    pub source_url: String,
    pub thumb_url: String,
    pub cached: bool,
}

impl AssetRecord {
    fn from_asset(asset: &ImageAsset) -> Self {
        Self {
            name: asset.base_name().to_string(),
            source_url: asset.source_url(),
            thumb_url: asset.thumb_url(),
            cached: asset.has_cached_thumbnail(),
        }
    }
}

/// The discovered-asset inventory as a JSON array, one object per asset.
pub fn format_asset_json(assets: &[ImageAsset]) -> serde_json::Value {
    let records: Vec<AssetRecord> = assets.iter().map(AssetRecord::from_asset).collect();
    serde_json::json!(records)
}

pub fn print_build_report(report: &BuildReport) {
    for line in format_build_report(report) {
        println!("{}", line);
    }
}

pub fn print_asset_list(assets: &[ImageAsset]) {
    for line in format_asset_list(assets) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::AssetOutcome;

    fn report(outcomes: Vec<AssetOutcome>) -> BuildReport {
        BuildReport {
            html: String::new(),
            outcomes,
        }
    }

    #[test]
    fn build_report_lists_each_asset_with_status() {
        let lines = format_build_report(&report(vec![
            AssetOutcome {
                name: "alps".to_string(),
                status: ThumbStatus::Generated,
            },
            AssetOutcome {
                name: "beach".to_string(),
                status: ThumbStatus::Cached,
            },
        ]));

        assert_eq!(lines[0], "001 alps: generated");
        assert_eq!(lines[1], "002 beach: cached");
        assert_eq!(lines.last().unwrap(), "2 thumbnails ok, 0 failed");
    }

    #[test]
    fn build_report_counts_failures() {
        let lines = format_build_report(&report(vec![
            AssetOutcome {
                name: "ok".to_string(),
                status: ThumbStatus::Generated,
            },
            AssetOutcome {
                name: "bad".to_string(),
                status: ThumbStatus::Failed("decode error".to_string()),
            },
            AssetOutcome {
                name: "anim".to_string(),
                status: ThumbStatus::SkippedUnsupported,
            },
        ]));

        assert_eq!(lines[1], "002 bad: failed (decode error)");
        assert_eq!(lines[2], "003 anim: skipped (no codec for extension)");
        assert_eq!(lines.last().unwrap(), "1 thumbnails ok, 2 failed");
    }

    #[test]
    fn empty_build_report_is_just_the_summary() {
        let lines = format_build_report(&report(Vec::new()));
        assert_eq!(lines, vec!["0 thumbnails ok, 0 failed"]);
    }

    #[test]
    fn asset_list_shows_cache_state() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("alps.jpg"), b"x").unwrap();
        std::fs::write(tmp.path().join("alps_thumb.jpg"), b"x").unwrap();
        std::fs::write(tmp.path().join("beach.jpg"), b"x").unwrap();

        let assets = crate::gallery::discover(tmp.path(), "/g");
        let lines = format_asset_list(&assets);

        assert_eq!(lines[0], "001 alps");
        assert_eq!(lines[1], "    Source: alps.jpg");
        assert_eq!(lines[2], "    Thumb:  alps_thumb.jpg (cached)");
        assert_eq!(lines[3], "002 beach");
        assert_eq!(lines[5], "    Thumb:  beach_thumb.jpg (missing)");
    }

    #[test]
    fn empty_asset_list_says_so() {
        assert_eq!(format_asset_list(&[]), vec!["No images found"]);
    }

    #[test]
    fn asset_json_carries_urls_and_cache_state() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("alps.jpg"), b"x").unwrap();
        std::fs::write(tmp.path().join("alps_thumb.jpg"), b"x").unwrap();
        std::fs::write(tmp.path().join("beach.jpg"), b"x").unwrap();

        let assets = crate::gallery::discover(tmp.path(), "/g");
        let json = format_asset_json(&assets);

        assert_eq!(json[0]["name"], "alps");
        assert_eq!(json[0]["source_url"], "/g/alps.jpg");
        assert_eq!(json[0]["thumb_url"], "/g/alps_thumb.jpg");
        assert_eq!(json[0]["cached"], true);
        assert_eq!(json[1]["name"], "beach");
        assert_eq!(json[1]["cached"], false);
    }

    #[test]
    fn asset_json_round_trips_through_value() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("dunes.png"), b"x").unwrap();

        let assets = crate::gallery::discover(tmp.path(), "");
        let json = format_asset_json(&assets);

        let text = serde_json::to_string_pretty(&json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, json);
    }

    #[test]
    fn asset_json_empty_inventory_is_empty_array() {
        assert_eq!(format_asset_json(&[]), serde_json::json!([]));
    }
}
