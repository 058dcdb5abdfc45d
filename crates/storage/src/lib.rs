//! Rule Storage
//!
//! Loads the response rule table from a JSON data source at startup.
//! The table is read-only for the lifetime of the process; a source that
//! is corrupt or incomplete is a fatal initialization error.

mod repository;

pub use repository::{RuleRepository, RuleSpec};

use thiserror::Error;

/// Fatal errors while initializing the rule data source
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("rule file {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rule table is unusable: {0}")]
    InvalidTable(#[from] rule_engine::RuleTableError),

    #[error("failed to encode rule file: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write default rule file {path}: {source}")]
    Init {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
