//! # Error Types
//!
//! This module defines the error types that end an invocation. Errors
//! local to one package operation live in [`crate::package::errors`].

use std::{io, path::PathBuf};

use thiserror;

/// Errors that occur while loading, completing or saving the config file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The home directory could not be determined.
    #[error("Failed to find the home directory")]
    NoHome,

    /// Failed to read the config file.
    #[error("Failed to read '{path}': {error}")]
    IoRead {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// Failed to create the directory holding the config file.
    #[error("Failed to create '{path}': {error}")]
    IoCreate {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// Failed to write the config file.
    #[error("Failed to write '{path}': {error}")]
    IoWrite {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The config file is not a JSON object of strings.
    #[error("Failed to deserialize '{path}': {error}")]
    Deserialize {
        /// The config file.
        path: PathBuf,
        /// The underlying deserialization error.
        #[source]
        error: serde_json::Error,
    },

    /// Failed to serialize the config.
    #[error("Failed to serialize config: {error}")]
    Serialize {
        /// The underlying serialization error.
        #[source]
        error: serde_json::Error,
    },

    /// Failed to read a missing value from the terminal.
    #[error("Failed to read '{field}' from the terminal: {error}")]
    Prompt {
        /// The config key being prompted for.
        field: &'static str,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },
}

/// Errors that stop the program with a non-zero exit status.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A mode that needs a package was run without one.
    #[error("No package given. Pass a package name or index, e.g. `clisnarf {mode} 0`.")]
    Usage {
        /// The mode that was run.
        mode: &'static str,
    },

    /// The config file could not be loaded or saved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The editor could not be launched.
    #[error("Failed to launch editor '{editor}': {error}")]
    Editor {
        /// The editor command line.
        editor: String,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The editor command line could not be split into words.
    #[error("Failed to parse editor command '{editor}': {error}")]
    EditorCommand {
        /// The editor command line.
        editor: String,
        /// The underlying parse error.
        #[source]
        error: shell_words::ParseError,
    },

    /// Failed to write to the terminal.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
