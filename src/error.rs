//! Errors raised while converting an asset

use std::{io, path::PathBuf};

use thiserror::Error;

/// The source text lacks a structural element required to build a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("bitmap array not found")]
    BitmapArrayNotFound,
    #[error("found {count} bitmap arrays, expected exactly one")]
    AmbiguousBitmapArray { count: usize },
    #[error("image descriptor not found (looked for `{name}`)")]
    DescriptorNotFound { name: String },
    #[error("dimensions not found")]
    DimensionsNotFound,
    #[error("image has no pixels: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("IO error")]
    Io(#[from] io::Error),
    #[error("failed to encode PNG")]
    Encoding(#[from] png::EncodingError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
