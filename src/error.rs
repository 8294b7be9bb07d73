use thiserror::Error;

/// Top-level error type for the polygon editor.
#[derive(Debug, Error)]
pub enum PolyeditError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by polygon registry commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("polygon not found")]
    PolygonNotFound,

    #[error("vertex not found")]
    VertexNotFound,

    #[error("cannot remove the last remaining polygon")]
    LastPolygon,

    #[error("only the active polygon can be removed")]
    NotActive,
}

/// Errors related to editor configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

/// Convenience type alias for results using [`PolyeditError`].
pub type Result<T> = std::result::Result<T, PolyeditError>;
