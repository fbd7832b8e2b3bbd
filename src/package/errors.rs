//! # Error Types
//!
//! This module defines the error types returned by the operations in the
//! [`crate::package`] module.

use std::{io, path::PathBuf};

use thiserror;

/// A package block that could not be turned into a [`Package`].
///
/// [`Package`]: crate::package::schema::Package
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A required field was not found in the block.
    #[error("package block has no {field}")]
    MissingField {
        /// The field that was not found.
        field: &'static str,
    },
}

/// Errors that occur when an identifier does not select a package.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// No identifier was given.
    #[error("no package identifier given")]
    Missing,

    /// A numeric identifier past the end of the list.
    #[error("no package at index {index} ({len} packages)")]
    OutOfRange {
        /// The identifier as given.
        index: String,
        /// The number of packages in the list.
        len: usize,
    },

    /// No package archive is named after the identifier.
    #[error("no package named '{identifier}'")]
    NotFound {
        /// The identifier as given.
        identifier: String,
    },
}

/// Errors that occur while talking to the portal.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the response not received.
    #[error("Request to '{url}' failed: {error}")]
    Request {
        /// The URL requested.
        url: String,
        /// The underlying HTTP error.
        #[source]
        error: reqwest::Error,
    },

    /// Failed to read the response body.
    #[error("Failed to read response from '{url}': {error}")]
    Read {
        /// The URL requested.
        url: String,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The portal answered with something other than 200 OK.
    #[error("Request to '{url}' returned status {status}")]
    Status {
        /// The URL requested.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Failed to create a progress bar.
    #[error("Failed to create progress bar: {0}")]
    ProgressBar(String),
}

/// Errors that occur while snarfing a package.
#[derive(thiserror::Error, Debug)]
pub enum SnarfError {
    /// The archive could not be fetched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The package name cannot be used as a directory name.
    #[error("Refusing to extract into '{name}'")]
    UnsafeName {
        /// The package name.
        name: String,
    },

    /// Failed to ask whether to overwrite.
    #[error("Failed to read confirmation: {0}")]
    Prompt(#[source] io::Error),

    /// Failed to write the downloaded archive.
    #[error("Failed to write '{path}': {error}")]
    IoWrite {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// Failed to open the downloaded archive.
    #[error("Failed to read '{path}': {error}")]
    IoRead {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The downloaded archive could not be extracted.
    #[error("Failed to extract '{path}': {error}")]
    Extract {
        /// The destination directory.
        path: PathBuf,
        /// The underlying archive error.
        #[source]
        error: zip::result::ZipError,
    },
}
