//! # CLI Snarf
//!
//! Lists the packages published on a snarf portal and snarfs them: downloads
//! a package's archive and extracts it into the current directory.

pub mod cli;
pub mod config;
mod editor;
pub mod errors;
pub mod package;
pub mod paths;
pub mod prompt;
#[cfg(test)]
mod testing;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;

use crate::{
    cli::{Cli, Mode},
    config::Config,
    errors::AppError,
    package::{
        SnarfOutcome, display,
        errors::SnarfError,
        resolver,
        transport::{Fetch, HttpClient},
    },
    paths::Paths,
    prompt::{Prompt, TerminalPrompt},
};

/// Runs the command given on the command line.
///
/// # Returns
///
/// Exit code 2 when a package was required but not given, 1 for any other
/// error that stops the program, and 0 otherwise. Failures of a single
/// operation, such as an unknown package or a failed request, are reported
/// on standard output and still exit with 0.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match run_in_terminal(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            match error {
                AppError::Usage { .. } => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run_in_terminal(cli: &Cli) -> Result<(), AppError> {
    let paths = Paths::from_home()?;
    let client = HttpClient::new();
    let mut prompt = TerminalPrompt;
    let mut stdout = io::stdout().lock();
    execute(
        cli,
        &paths,
        &editor::editor_command(),
        &client,
        &mut prompt,
        &mut stdout,
    )
}

/// Executes one invocation.
///
/// The config is loaded once (asking for any missing keys), handed to the
/// selected mode, and written back once at the end, also when the mode
/// failed.
///
/// # Arguments
///
/// - `cli` - The parsed command line.
/// - `paths` - Config, download and destination locations.
/// - `editor` - The editor command line for the `config` mode.
/// - `fetch` - The HTTP client.
/// - `prompt` - Answers interactive questions.
/// - `out` - Receives everything shown to the user.
///
/// # Returns
///
/// `Ok(())` unless the invocation must end with a non-zero exit code.
pub fn execute(
    cli: &Cli,
    paths: &Paths,
    editor: &str,
    fetch: &impl Fetch,
    prompt: &mut impl Prompt,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let mut config = Config::load(&paths.config, prompt)?;

    let outcome = match cli.mode {
        Mode::Config => {
            // Save first so the editor sees the completed file, then pick up
            // the edits so the final save keeps them.
            config.save(&paths.config)?;
            editor::edit(editor, &paths.config)?;
            config = Config::load(&paths.config, prompt)?;
            Ok(())
        }
        Mode::Ls => list_packages(cli, &config, fetch, out),
        mode => with_package(mode, cli, &config, paths, fetch, prompt, out),
    };

    config.save(&paths.config)?;
    outcome
}

fn list_packages(
    cli: &Cli,
    config: &Config,
    fetch: &impl Fetch,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match package::fetch_packages(fetch, &config.snarfpath, cli.hidden) {
        Ok(packages) => display::list(&packages, out)?,
        Err(error) => {
            log::warn!("{error}");
            writeln!(out, "Request failed.")?;
        }
    }
    Ok(())
}

/// Runs a mode that operates on the one package named by `cli.pkg`.
fn with_package(
    mode: Mode,
    cli: &Cli,
    config: &Config,
    paths: &Paths,
    fetch: &impl Fetch,
    prompt: &mut impl Prompt,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let identifier = resolver::require(cli.pkg.as_deref()).map_err(|_| AppError::Usage {
        mode: mode.to_str(),
    })?;

    let packages = match package::fetch_packages(fetch, &config.snarfpath, cli.hidden) {
        Ok(packages) => packages,
        Err(error) => {
            log::warn!("{error}");
            writeln!(out, "Request failed.")?;
            return Ok(());
        }
    };

    let package = match package::resolve(&packages, identifier) {
        Ok(package) => package,
        Err(error) => {
            log::debug!("{error}");
            writeln!(out, "Invalid package.")?;
            return Ok(());
        }
    };

    match mode {
        Mode::Info => display::info(package, out)?,
        Mode::Snarf => {
            match package::snarf(fetch, prompt, package, &paths.download, &paths.destination) {
                Ok(SnarfOutcome::Snarfed(_)) => writeln!(out, "{} snarfed.", package.name)?,
                Ok(SnarfOutcome::Declined) => {}
                Err(SnarfError::Transport(error)) => {
                    log::warn!("{error}");
                    writeln!(out, "Request failed.")?;
                }
                Err(error) => writeln!(out, "Failed to snarf {}: {error}", package.name)?,
            }
        }
        Mode::Submit => {
            if let Some(work) = &cli.submit {
                log::debug!("Work to submit: '{}'", work.display());
            }
            log::warn!(
                "Submitting is not implemented; nothing was sent for '{}'",
                package.name
            );
        }
        Mode::Ls | Mode::Config => {}
    }
    Ok(())
}
