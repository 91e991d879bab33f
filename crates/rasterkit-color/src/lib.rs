//! rasterkit-color - Color processing for the rasterkit image toolkit
//!
//! This crate provides the per-pixel color operations:
//!
//! - **Grayscale reduction** ([`grayscale`]): luminance-weighted conversion
//! - **Histogram equalization** ([`equalize`]): contrast enhancement
//! - **Posterization** ([`posterize`]): nearest-palette-color quantization
//! - **Mosaic** ([`mosaic`]): block pixelization by sampled replication
//! - **Chroma key** ([`chroma`]): green-screen compositing
//!
//! Every operation borrows its input raster(s) and returns a freshly built
//! result; inputs are never modified.

pub mod chroma;
pub mod equalize;
mod error;
pub mod grayscale;
pub mod mosaic;
pub mod posterize;

// Re-export core types
pub use rasterkit_core;

pub use chroma::{chroma_key, is_chroma_green};
pub use equalize::equalize;
pub use error::{ColorError, ColorResult};
pub use grayscale::to_grayscale;
pub use mosaic::{DEFAULT_TILE_SIZE, pixelize};
pub use posterize::{posterize, weighted_distance};
