//! Error types for plane operations and the command driver

use std::fmt;
use std::path::PathBuf;

use crate::geometry::Point;
use crate::plane::arena::TileHandle;

/// Main error type for all plane and driver operations
#[derive(Debug)]
pub enum PlaneError {
    /// A queried point lies outside the plane's extent
    OutOfBounds {
        /// The offending point
        point: Point,
        /// Plane width
        width: i32,
        /// Plane height
        height: i32,
    },

    /// A rectangle with a non-positive extent was passed to construction
    /// or insertion
    DegenerateRect {
        /// Provided width
        width: i32,
        /// Provided height
        height: i32,
    },

    /// A handle refers to a tile that was merged away
    StaleHandle {
        /// The stale handle
        handle: TileHandle,
    },

    /// A stitch required by the partition invariant was missing
    ///
    /// Cannot occur on a plane mutated only through the public operations;
    /// it guards traversals against a mesh corrupted by a logic error.
    MeshCorrupted {
        /// Operation that hit the hole
        operation: &'static str,
    },

    /// A command script line could not be parsed
    InvalidCommand {
        /// One-based line number in the script
        line: usize,
        /// Explanation of what was expected
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
}

impl fmt::Display for PlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "Point ({}, {}) lies outside the {width}x{height} plane",
                    point.x, point.y
                )
            }
            Self::DegenerateRect { width, height } => {
                write!(f, "Degenerate rectangle: {width}x{height}")
            }
            Self::StaleHandle { handle } => {
                write!(f, "Tile handle {handle} refers to a merged-away tile")
            }
            Self::MeshCorrupted { operation } => {
                write!(f, "Stitch mesh corrupted: missing stitch during {operation}")
            }
            Self::InvalidCommand { line, reason } => {
                write!(f, "Invalid command on line {line}: {reason}")
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
        }
    }
}

impl std::error::Error for PlaneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlaneError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for plane results
pub type Result<T> = std::result::Result<T, PlaneError>;

/// Create a command parse error
pub fn invalid_command(line: usize, reason: &impl ToString) -> PlaneError {
    PlaneError::InvalidCommand {
        line,
        reason: reason.to_string(),
    }
}
