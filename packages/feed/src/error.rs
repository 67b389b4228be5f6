use thiserror::Error;

/// A gateway call that produced no usable data.
///
/// Callers never propagate this past the fetch chain: the affected region
/// switches to its error placeholder and the chain stops.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not complete (DNS, connection, CORS, ...).
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The body was not a JSON array of the expected records.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid feed config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Host page preconditions that must hold before the app is mounted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no document available")]
    NoDocument,
    #[error("mount point #{0} not found in host page")]
    MissingMountPoint(String),
}
