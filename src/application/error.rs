//! Application-level errors (wraps conformance errors)

use thiserror::Error;

use crate::conformance::ConformanceError;

/// Application errors wrap lower-level errors and add application context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{kind}: {source}")]
    Conformance {
        kind: String,
        #[source]
        source: ConformanceError,
    },

    #[error("unknown fixture: {0}")]
    UnknownFixture(String),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
