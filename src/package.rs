//! # Packages
//!
//! This module turns the portal's index document into packages and snarfs
//! them.

pub mod display;
pub mod downloader;
pub mod errors;
pub mod parser;
pub mod resolver;
mod scanner;
pub mod schema;
pub mod transport;

pub use downloader::{SnarfOutcome, fetch_packages, snarf};
pub use parser::parse;
pub use resolver::resolve;
