//! # Display
//!
//! Formats packages for the terminal.

use std::io::{self, Write};

use crate::package::schema::{Package, PackageList};

/// Spaces between the longest name and its description.
const NAME_MARGIN: usize = 2;

/// Writes one line per package: index, name and description.
///
/// Column widths come from the list being printed: the index column fits
/// the largest index and the name column fits the longest name.
pub fn list(packages: &PackageList, out: &mut impl Write) -> io::Result<()> {
    if packages.is_empty() {
        return writeln!(out, "No packages found.");
    }

    let index_width = format!("{}:", packages.len() - 1).len();
    let name_width = packages
        .iter()
        .map(|package| package.name.chars().count())
        .max()
        .unwrap_or(0)
        + NAME_MARGIN;

    for (index, package) in packages.iter().enumerate() {
        let line = format!(
            "{:<index_width$} {:<name_width$}{}",
            format!("{index}:"),
            package.name,
            package.description
        );
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Writes every field of one package under a header naming it.
pub fn info(package: &Package, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== {} ==", package.name)?;
    writeln!(out, "Name:        {}", package.name)?;
    writeln!(out, "Category:    {}", package.category)?;
    writeln!(out, "Description: {}", package.description)?;
    writeln!(out, "URL:         {}", package.url)
}
