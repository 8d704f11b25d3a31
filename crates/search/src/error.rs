//! Error types for the search model.
//!
//! Every model operation returns a [`ModelResult`]. Errors fall into three
//! categories: invalid caller parameters, failures reported by the search
//! engine, and configuration problems detected while wiring the engine.
//! None of them are retried or recovered inside this crate.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all search model operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Parameter validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Search engine errors
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while checking caller-supplied parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The parameters were not a key/value object.
    #[error("parameters must be an object")]
    NotAnObject,

    /// A required parameter is absent or empty.
    #[error("missing required parameter '{param}'")]
    MissingParam { param: String },

    /// Neither of two alternative parameter sets is present.
    #[error("supply either [{}] or [{}]", first.join(", "), second.join(", "))]
    MissingEither {
        first: Vec<String>,
        second: Vec<String>,
    },

    /// The page number could not be coerced to a positive integer.
    #[error("invalid page number '{value}'")]
    InvalidPage { value: String },
}

/// Errors reported by (or while talking to) the search engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The request never produced a response.
    #[error("{engine} transport error: {message}")]
    Transport {
        engine: &'static str,
        message: String,
    },

    /// The engine answered with a non-success status.
    #[error("{engine} returned status {status}: {body}")]
    Status {
        engine: &'static str,
        status: u16,
        body: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode {engine} response: {message}")]
    Decode {
        engine: &'static str,
        message: String,
    },

    /// The request could not be expressed for this engine.
    #[error("invalid {engine} request: {message}")]
    InvalidRequest {
        engine: &'static str,
        message: String,
    },
}

/// Errors detected while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No engine connection settings were supplied.
    #[error("elasticsearch connection settings are missing from the configuration")]
    MissingElasticsearch,

    /// The engine address could not be parsed.
    #[error("invalid elasticsearch host '{host}': {message}")]
    InvalidHost { host: String, message: String },

    /// The engine client could not be constructed.
    #[error("failed to build search engine client: {message}")]
    ClientBuild { message: String },

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid.
    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SearchError {
    /// Returns true when the caller supplied invalid parameters.
    pub fn is_validation(&self) -> bool {
        matches!(self, SearchError::Validation(_))
    }

    /// Returns true when the failure originated in the search engine.
    pub fn is_engine(&self) -> bool {
        matches!(self, SearchError::Engine(_))
    }
}

/// Result type alias for search model operations.
pub type ModelResult<T> = Result<T, SearchError>;

/// Result type alias for engine calls.
pub type EngineResult<T> = Result<T, EngineError>;
