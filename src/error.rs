use thiserror::Error;

/// Errors raised by the checked constructors.
///
/// The numeric operations themselves are total: they return non-finite
/// values on degenerate input instead of failing. Only the `try_*`
/// entry points report degeneracy through this type.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
