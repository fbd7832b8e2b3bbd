//! # Package Downloader
//!
//! This module fetches the portal's index document and snarfs packages:
//! it downloads a package's archive and extracts it into a directory named
//! after the package.

use std::{
    fs::{self, File},
    path::{Component, Path, PathBuf},
};

use zip::ZipArchive;

use crate::{
    package::{
        errors::{SnarfError, TransportError},
        parser,
        schema::{Package, PackageList},
        transport::{self, Fetch},
    },
    paths::INDEX_FILE,
    prompt::Prompt,
};

/// What a snarf that did not fail ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnarfOutcome {
    /// The archive was extracted into this directory.
    Snarfed(PathBuf),
    /// The destination existed and the user chose not to overwrite it.
    Declined,
}

/// Fetches and parses the index document under `root`.
///
/// # Arguments
///
/// - `fetch` - The HTTP client.
/// - `root` - The snarf root URL.
/// - `hidden` - True to include commented-out packages.
///
/// # Returns
///
/// The packages on success, or a [`TransportError`] if the document could
/// not be fetched.
pub fn fetch_packages(
    fetch: &impl Fetch,
    root: &str,
    hidden: bool,
) -> Result<PackageList, TransportError> {
    let url = format!("{}/{INDEX_FILE}", root.trim_end_matches('/'));
    let body = transport::get_ok(fetch, &url)?;
    let document = String::from_utf8_lossy(&body);

    let packages = parser::parse(&document, root, hidden);
    log::debug!("Found {} packages in '{url}'", packages.len());
    Ok(packages)
}

/// Downloads a package's archive and extracts it.
///
/// If the destination directory already exists the user is asked before
/// anything is written. The archive is written to `download_path` and
/// removed again once extraction has finished, whether or not it
/// succeeded.
///
/// # Side Effects
///
/// - Creates or overwrites files under `destination_root/<name>/`.
///
/// # Arguments
///
/// - `fetch` - The HTTP client.
/// - `prompt` - Asks whether to overwrite an existing directory.
/// - `package` - The package to snarf.
/// - `download_path` - Where the archive is kept during extraction.
/// - `destination_root` - The directory the package directory is created in.
///
/// # Returns
///
/// A [`SnarfOutcome`] on success, or a [`SnarfError`] on failure.
pub fn snarf(
    fetch: &impl Fetch,
    prompt: &mut impl Prompt,
    package: &Package,
    download_path: &Path,
    destination_root: &Path,
) -> Result<SnarfOutcome, SnarfError> {
    let name = &package.name;
    if !is_plain_name(name) {
        return Err(SnarfError::UnsafeName { name: name.clone() });
    }

    let archive = transport::get_ok(fetch, &package.url)?;

    let destination = destination_root.join(name);
    if destination.is_dir() {
        let overwrite = prompt
            .confirm(&format!("{name} already exists. Overwrite? [y/N] "))
            .map_err(SnarfError::Prompt)?;
        if !overwrite {
            return Ok(SnarfOutcome::Declined);
        }
    }

    fs::write(download_path, &archive).map_err(|error| SnarfError::IoWrite {
        path: download_path.to_path_buf(),
        error,
    })?;

    let extracted = extract(download_path, &destination);
    if let Err(error) = fs::remove_file(download_path) {
        log::warn!("Failed to remove '{}': {error}", download_path.display());
    }
    extracted?;

    Ok(SnarfOutcome::Snarfed(destination))
}

/// Extracts the zip archive at `archive_path` into `destination`.
fn extract(archive_path: &Path, destination: &Path) -> Result<(), SnarfError> {
    log::debug!(
        "Extracting '{}' into '{}'",
        archive_path.display(),
        destination.display()
    );
    let file = File::open(archive_path).map_err(|error| SnarfError::IoRead {
        path: archive_path.to_path_buf(),
        error,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|error| SnarfError::Extract {
        path: destination.to_path_buf(),
        error,
    })?;
    archive
        .extract(destination)
        .map_err(|error| SnarfError::Extract {
            path: destination.to_path_buf(),
            error,
        })
}

/// True if `name` is a single ordinary path component.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
