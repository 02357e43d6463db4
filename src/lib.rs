//! # svg-anchor-export
//!
//! Converts SVG drawings into ASCII FBX 6.1 scenes of anchor markers.
//!
//! Each path of a drawing is sampled into a fixed number of points. The
//! points become `Anchor` null models grouped under an `Area` per path, and
//! each area also gets a unit-cube mesh placeholder with a Lambert material
//! carrying the path's fill color.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use svg_anchor_export::{SampleOptions, export_all, load_drawings};
//!
//! let items = load_drawings(Path::new("work"), &SampleOptions::default()).unwrap();
//! let report = export_all(&items, Path::new("export"));
//! println!("{} written, {} failed", report.written.len(), report.failed.len());
//! ```

pub mod color;
pub mod error;
pub mod export;
pub mod fbx;
pub mod number;
pub mod scene;
pub mod svg;
pub mod types;

// Re-export commonly used items
pub use color::hex_to_rgb;
pub use error::{ExportError, Result};
pub use export::{ExportReport, export_all, export_item, write_item};
pub use number::format_fixed;
pub use scene::{SceneGraph, build};
pub use svg::{SampleOptions, load_drawing, load_drawings, sample_svg};
pub use types::{Color, DrawingItem, PathSample, Point2D, Point3D};
