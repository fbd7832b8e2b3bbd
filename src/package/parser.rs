//! # Index Parsing
//!
//! The main entry point is [`parse`], which turns the text of the portal's
//! index document into a [`PackageList`].

use crate::package::{
    errors::ParseError,
    scanner,
    schema::{Package, PackageList},
};

/// Parses the packages listed in an index document.
///
/// Commented-out packages are dropped unless `hidden` is set. Blocks that
/// are missing any field are skipped, so one malformed entry never hides
/// the rest.
///
/// # Arguments
///
/// - `document` - The text of the index document.
/// - `root` - The snarf root URL; only archives under it are recognised.
/// - `hidden` - True to include packages inside comments.
///
/// # Returns
///
/// The parsed packages in document order.
pub fn parse(document: &str, root: &str, hidden: bool) -> PackageList {
    let stripped;
    let text = if hidden {
        document
    } else {
        stripped = scanner::strip_comments(document);
        &stripped
    };

    let packages = scanner::package_blocks(text)
        .into_iter()
        .filter_map(|block| match parse_package(block, root) {
            Ok(package) => Some(package),
            Err(error) => {
                log::debug!("Skipping package block: {error}");
                None
            }
        })
        .collect();

    PackageList::new(packages)
}

/// Parses a single package block.
///
/// # Arguments
///
/// - `block` - The text of one block, opening tag included.
/// - `root` - The snarf root URL.
///
/// # Returns
///
/// The [`Package`] on success, or [`ParseError`] naming the first field
/// that could not be found.
pub fn parse_package(block: &str, root: &str) -> Result<Package, ParseError> {
    let url = scanner::archive_url(block, root);
    let name = scanner::delimited(block, "name=\"", "\"");
    let category = scanner::delimited(block, "category=\"", "\"");
    let description = scanner::delimited(block, "<description>", "</description>");

    Ok(Package {
        name: required(name, "name")?,
        category: required(category, "category")?,
        description: required(description, "description")?,
        url: required(url, "url")?,
    })
}

fn required(field: Option<&str>, label: &'static str) -> Result<String, ParseError> {
    field
        .map(str::to_string)
        .ok_or(ParseError::MissingField { field: label })
}
