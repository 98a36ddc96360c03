use thiserror::Error;

/// Errors raised when building shapes from loosely typed input.
/// Geometric queries themselves never fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The number of vertices does not match the shape.
    #[error("expected {expected} vertices, found {found}")]
    VertexCount { expected: usize, found: usize },
}
