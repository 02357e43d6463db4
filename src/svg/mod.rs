//! SVG drawing sampler
//!
//! Loads SVG files with usvg and reduces every path to a fixed number of
//! points, evenly spaced along the path and expressed in a frame centered on
//! the document with Y pointing up. Points are measured in root viewBox user
//! units when the document has one. The fill color is kept as a hex string.

mod sample;
mod viewbox;

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::color::to_hex;
use crate::error::{ExportError, Result};
use crate::types::{DrawingItem, PathSample, Viewport, XForm};

pub use sample::{flatten, sample_polylines, transform_point};
pub use viewbox::{AspectRatio, ViewBox, root_view_box};

/// Options for path sampling
#[derive(Debug, Clone)]
pub struct SampleOptions {
    /// Points taken along each path (default: 40)
    pub samples: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self { samples: 40 }
    }
}

/// Sample every path of an SVG document
pub fn sample_svg(name: &str, svg_data: &str, options: &SampleOptions) -> std::result::Result<DrawingItem, usvg::Error> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_data, &opt)?;

    let (width, height) = (tree.size().width() as f64, tree.size().height() as f64);
    let frame = match root_view_box(svg_data) {
        Some(vb) => match vb.size_transform(width, height).invert() {
            Some(to_user) => Frame {
                viewport: Viewport::new(vb.width, vb.height),
                to_user,
            },
            None => Frame::size(width, height),
        },
        None => Frame::size(width, height),
    };

    let mut paths = Vec::new();
    collect_group(tree.root(), &frame, options, &mut paths);

    Ok(DrawingItem::new(name, paths))
}

/// Canvas the points are centered on, plus the map from usvg's absolute
/// coordinates back into that canvas
struct Frame {
    viewport: Viewport,
    to_user: XForm,
}

impl Frame {
    fn size(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            to_user: XForm::identity(),
        }
    }
}

fn collect_group(
    group: &usvg::Group,
    frame: &Frame,
    options: &SampleOptions,
    paths: &mut Vec<PathSample>,
) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => collect_group(g, frame, options, paths),
            usvg::Node::Path(path) => paths.push(sample_path(path, frame, options)),
            usvg::Node::Image(_) => {}
            usvg::Node::Text(_) => {}
        }
    }
}

fn sample_path(path: &usvg::Path, frame: &Frame, options: &SampleOptions) -> PathSample {
    let xform = frame.to_user.compose(&XForm::from(path.abs_transform()));
    let polylines = flatten(path.data(), &xform);
    let points = sample_polylines(&polylines, options.samples)
        .into_iter()
        .map(|p| transform_point(p, frame.viewport))
        .collect();

    let color = path.fill().and_then(|f| match f.paint() {
        usvg::Paint::Color(c) => Some(to_hex(c)),
        _ => None,
    });

    PathSample::new(color, points)
}

/// Load and sample one SVG file; the item is named after the file stem
pub fn load_drawing(path: &Path, options: &SampleOptions) -> Result<DrawingItem> {
    let svg_data = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let item = sample_svg(&name, &svg_data, options).map_err(|e| ExportError::SvgParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(name = %item.name, paths = item.paths.len(), "sampled drawing");
    Ok(item)
}

/// Load every file in `dir`, in file-name order. Files that cannot be read
/// or parsed are logged and skipped.
pub fn load_drawings(dir: &Path, options: &SampleOptions) -> Result<Vec<DrawingItem>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    let mut items = Vec::new();
    for file in files {
        info!("Processing file: {}...", file.display());
        match load_drawing(&file, options) {
            Ok(item) => items.push(item),
            Err(e) => warn!("Skipping {}: {}", file.display(), e),
        }
    }
    Ok(items)
}
