use thiserror::Error;

/// Convenient result alias for the roadgraph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Raised when an edge weight is negative or not a finite number.
    #[error("invalid weight {weight} for edge {from} -> {to}; weights must be finite and non-negative")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when a query starts from a node that no edge mentions.
    #[error("unknown source node: {node}")]
    UnknownSource { node: String },

    /// Raised when a path query targets a node that no edge mentions.
    #[error("unknown destination node: {node}")]
    UnknownDestination { node: String },

    /// Raised when a `lat,lng` pair cannot be parsed.
    #[error("invalid coordinate '{value}'; expected 'lat,lng'")]
    InvalidCoordinate { value: String },

    /// Raised when a `FROM:TO:WEIGHT` edge specification cannot be parsed.
    #[error("invalid edge specification '{spec}'; expected 'FROM:TO:WEIGHT'")]
    InvalidEdgeSpec { spec: String },
}
