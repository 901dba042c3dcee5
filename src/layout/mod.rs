//! Text layout: splitting text into lines and placing them on a canvas.
//!
//! Layout happens in two steps. [`wrap`](crate::layout::wrap) greedily packs
//! whitespace-separated words into [`LayoutLine`](crate::layout::LayoutLine)s
//! using a character-count estimate of line width, and
//! [`DrawRegion`](crate::layout::DrawRegion) describes the inset rectangle
//! those lines are drawn into.
//!
//! # Example
//!
//! ```
//! use ttb::{FaceOptions, FontFace};
//! use ttb::layout::{wrap, DrawRegion};
//!
//! let font_path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSans.ttf");
//! let face = FontFace::load(font_path, FaceOptions::default()).expect("can load font");
//!
//! let region = DrawRegion::for_canvas(400, 400);
//! let lines = wrap("Hello, world!", &face, region.extent.0);
//! assert_eq!(lines.len(), 1);
//! ```

mod margins;
mod wrap;

pub use margins::*;
pub use wrap::*;
