//! Export error definitions

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse SVG {}: {message}", path.display())]
    SvgParse { path: PathBuf, message: String },

    #[error("material {material} has no valid color")]
    MissingColor { material: String },

    #[error("duplicate node name: {0}")]
    DuplicateName(String),

    #[error("invalid drawing name: {0:?}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
