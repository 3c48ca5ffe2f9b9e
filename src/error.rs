use std::path::PathBuf;

use thiserror::Error;

/// Problems detected while assembling the content catalog at start-up. They
/// can only come from the static content definitions, never from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("the category registry is empty")]
    EmptyRegistry,
    #[error("category `{0}` is registered more than once")]
    DuplicateCategory(String),
    #[error("tips were supplied for unregistered category `{0}`")]
    UnknownCategory(String),
    #[error("tip id {id} appears in both `{first}` and `{second}`")]
    DuplicateTipId {
        id: u32,
        first: String,
        second: String,
    },
}

/// Failures while reading the optional settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not locate a configuration directory")]
    NoConfigDir,
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("compact_width must be greater than zero")]
    InvalidCompactWidth,
}
