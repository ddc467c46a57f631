//! Core library for stacking sliced sprites into tiled spritesheets.
//!
//! - Slicing: cut a source image into fixed-height horizontal bands
//! - Stacking: composite the bands with a one-pixel vertical offset per layer
//!   to fake depth ("sprite stacking")
//! - Sheet: arrange the stacked sprites into a row-major grid image
//! - Data model is serde-serializable; JSON exporters are provided for the
//!   CLI crate.
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use sprite_stacker_core::{InputImage, StackerConfig, build_sheet};
//! # fn main() -> anyhow::Result<()> {
//! let img1 = ImageReader::open("tank.png")?.decode()?;
//! let img2 = ImageReader::open("barrel.png")?.decode()?;
//! let inputs = vec![
//!   InputImage { key: "tank".into(), image: img1 },
//!   InputImage { key: "barrel".into(), image: img2 },
//! ];
//! let cfg = StackerConfig { sheet_width: 12, ..Default::default() };
//! let out = build_sheet(inputs, cfg)?;
//! println!("sheet: {}x{}", out.layout.width, out.layout.height);
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod pipeline;
pub mod sheet;
pub mod slicer;
pub mod stack;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use pipeline::*;
pub use sheet::*;
pub use slicer::*;
pub use stack::*;

/// Convenience prelude for common types and functions.
/// Importing `sprite_stacker_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{SortOrder, StackerConfig, StackerConfigBuilder};
    pub use crate::model::{Meta, Placement, Rect, SheetLayout, SheetStats};
    pub use crate::sheet::layout_sheet;
    pub use crate::{InputImage, SheetOutput, build_sheet, compose_stack, slice_tiles};
}
