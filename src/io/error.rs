//! Error types and context management for tokenizing and rendering operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all tokenizing, rendering and composition operations
#[derive(Debug)]
pub enum PeriodicError {
    /// A greedily extracted symbol is not present in the catalog
    UnknownSymbol {
        /// The unresolved symbol text
        symbol: String,
        /// The raw input the symbol was extracted from
        input: String,
    },

    /// The element catalog could not be read or parsed
    CatalogUnavailable {
        /// Path of the catalog file
        path: PathBuf,
        /// Underlying read or parse error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to load a cached tile from disk
    TileLoad {
        /// Path to the tile file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a tile or composition to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Font file could not be read or parsed
    FontLoad {
        /// Path of the font file
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

/// Coarse classification of [`PeriodicError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Tokenizer could not resolve a symbol
    UnknownSymbol,
    /// Catalog could not be loaded
    CatalogUnavailable,
    /// Loading, drawing or persisting an image failed
    RenderFailure,
    /// Caller supplied an invalid argument
    InvalidInput,
}

impl PeriodicError {
    /// Classify the error for callers that only care about the failure family
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownSymbol { .. } => ErrorKind::UnknownSymbol,
            Self::CatalogUnavailable { .. } => ErrorKind::CatalogUnavailable,
            Self::TileLoad { .. }
            | Self::ImageExport { .. }
            | Self::FontLoad { .. }
            | Self::FileSystem { .. } => ErrorKind::RenderFailure,
            Self::InvalidParameter { .. } => ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for PeriodicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, input } => {
                write!(f, "Element {symbol} doesn't exist (in '{input}')")
            }
            Self::CatalogUnavailable { path, source } => {
                write!(
                    f,
                    "Element catalog '{}' is unavailable: {source}",
                    path.display()
                )
            }
            Self::TileLoad { path, source } => {
                write!(f, "Failed to load tile '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FontLoad { path, reason } => {
                write!(f, "Failed to load font '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PeriodicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TileLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::CatalogUnavailable { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, PeriodicError>;

/// Attaches the path and operation to failed file system calls
pub trait WithPath<T> {
    /// Convert an I/O failure into [`PeriodicError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PeriodicError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PeriodicError {
    PeriodicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unknown symbol error
pub fn unknown_symbol(symbol: &str, input: &str) -> PeriodicError {
    PeriodicError::UnknownSymbol {
        symbol: symbol.to_string(),
        input: input.to_string(),
    }
}
