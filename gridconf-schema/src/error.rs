use thiserror::Error;

/// Result type for gridconf-schema lookups.
pub type Result<T> = std::result::Result<T, Error>;

/// Lookup failure for a symbolic name received from the web client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown database: {0}")]
    UnknownDatabase(String),

    #[error("unknown eviction policy: {0}")]
    UnknownEvictionPolicy(String),

    #[error("unknown marshaller: {0}")]
    UnknownMarshaller(String),

    #[error("unknown store factory: {0}")]
    UnknownStoreFactory(String),
}
