use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Pattern file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid pattern config: {0}")]
    ConfigFormat(String),

    #[error("Malformed pattern config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid pattern for category `{category}`: {source}")]
    PatternCompile {
        category: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
