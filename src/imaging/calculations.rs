//! Pure calculation functions for thumbnail geometry.
//!
//! Everything here is pure and testable without any I/O or pixel data. The
//! single entry point, [`compute_target_canvas`], turns source dimensions
//! plus a [`ThumbnailPolicy`] into a [`CanvasSpec`] describing the output
//! raster and where the resampled source lands inside it.

use crate::policy::ThumbnailPolicy;

/// Output raster geometry for one thumbnail.
///
/// The backend allocates a `canvas_width` × `canvas_height` raster and
/// resamples the source to `draw_width` × `draw_height`, positioned at
/// (`offset_x`, `offset_y`). In crop mode the offsets are zero or negative —
/// the scaled image overflows the canvas and the overflow is clipped. In fit
/// mode the canvas equals the draw size and the offsets are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub draw_width: u32,
    pub draw_height: u32,
    pub offset_x: i64,
    pub offset_y: i64,
}

/// Compute the output canvas and draw placement for a source image.
///
/// 1. Classify source and policy box as landscape (`width > height`) or not.
///    Unless `force_dimensions` is set, a mismatch swaps the policy's
///    width/height — a fixed landscape box adapts to a portrait source and
///    vice versa. A square source counts as portrait.
/// 2. Crop mode scales by the *larger* of the width/height ratios so the
///    draw covers the whole target box, centers it, and clips the overflow:
///    the canvas is exactly the target box.
/// 3. Fit mode scales by the *smaller* ratio so the whole image fits: the
///    canvas shrinks to the draw size and nothing is clipped or padded.
///
/// # Examples
/// ```
/// # use thumbgal::imaging::compute_target_canvas;
/// # use thumbgal::policy::ThumbnailPolicy;
/// // Landscape source into the default 140x93 crop box
/// let spec = compute_target_canvas((1400, 700), &ThumbnailPolicy::default());
/// assert_eq!((spec.canvas_width, spec.canvas_height), (140, 93));
/// assert_eq!((spec.draw_width, spec.draw_height), (186, 93));
/// assert_eq!((spec.offset_x, spec.offset_y), (-23, 0));
/// ```
pub fn compute_target_canvas(source: (u32, u32), policy: &ThumbnailPolicy) -> CanvasSpec {
    let (src_w, src_h) = source;

    let source_is_landscape = src_w > src_h;
    let policy_is_landscape = policy.width > policy.height;
    let (target_w, target_h) = if !policy.force_dimensions
        && source_is_landscape != policy_is_landscape
    {
        (policy.height, policy.width)
    } else {
        (policy.width, policy.height)
    };

    let width_ratio = target_w as f64 / src_w as f64;
    let height_ratio = target_h as f64 / src_h as f64;

    if policy.crop {
        let ratio = width_ratio.max(height_ratio);
        // Clamp so rounding never leaves the draw short of the canvas.
        let draw_w = ((src_w as f64 * ratio).round() as u32).max(target_w);
        let draw_h = ((src_h as f64 * ratio).round() as u32).max(target_h);
        CanvasSpec {
            canvas_width: target_w,
            canvas_height: target_h,
            draw_width: draw_w,
            draw_height: draw_h,
            offset_x: (target_w as i64 - draw_w as i64) / 2,
            offset_y: (target_h as i64 - draw_h as i64) / 2,
        }
    } else {
        let ratio = width_ratio.min(height_ratio);
        let draw_w = (src_w as f64 * ratio).round() as u32;
        let draw_h = (src_h as f64 * ratio).round() as u32;
        CanvasSpec {
            canvas_width: draw_w,
            canvas_height: draw_h,
            draw_width: draw_w,
            draw_height: draw_h,
            offset_x: 0,
            offset_y: 0,
        }
    }
}
