//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Thumbnail** | `resize_exact` (Lanczos3) + `crop_imm` per [`CanvasSpec`] |
//! | **Encode** | JPEG with quality hint, PNG default compression |
//!
//! The module is split into:
//! - **Calculations**: pure geometry math (unit testable, no I/O)
//! - **Parameters**: data describing one thumbnail operation
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
pub mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{CanvasSpec, compute_target_canvas};
pub use params::ThumbnailParams;
pub use rust_backend::{RustBackend, is_supported_extension};
