//! # CLI
//!
//! This module defines the data structures used to parse command line
//! arguments when running the program.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// This struct represents the top-level CLI entry point for the tool.
#[derive(Parser, Debug)]
#[command(
    name = "clisnarf",
    about = "Lists and snarfs packages from a snarf portal",
    long_about = None
)]
pub struct Cli {
    /// The operation to perform.
    #[arg(value_enum, default_value = "ls")]
    pub mode: Mode,

    /// Package name or index.
    pub pkg: Option<String>,

    /// Path to your work to submit.
    pub submit: Option<PathBuf>,

    /// Allow hidden packages.
    #[arg(long)]
    pub hidden: bool,
}

/// This enum represents the different modes available.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// List the packages on the portal.
    Ls,

    /// Open the config file in an editor.
    Config,

    /// Show the details of one package.
    Info,

    /// Download and extract one package.
    Snarf,

    /// Submit work for one package.
    Submit,
}

impl Mode {
    /// Converts the enum type to the string used on the command line.
    ///
    /// # Returns
    ///
    /// One of "ls", "config", "info", "snarf" or "submit".
    pub fn to_str(&self) -> &'static str {
        match self {
            Mode::Ls => "ls",
            Mode::Config => "config",
            Mode::Info => "info",
            Mode::Snarf => "snarf",
            Mode::Submit => "submit",
        }
    }
}
