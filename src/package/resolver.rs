//! # Identifier Resolution
//!
//! Users pick a package either by its zero-based position in the listing
//! or by the name of its archive.

use crate::package::{
    errors::ResolveError,
    schema::{Package, PackageList},
};

/// Checks that an identifier was given.
///
/// This is the only place an absent identifier is rejected; callers pass
/// the result on to [`resolve`].
pub fn require(identifier: Option<&str>) -> Result<&str, ResolveError> {
    identifier.ok_or(ResolveError::Missing)
}

/// Selects exactly one package.
///
/// An identifier made only of ASCII digits is a position in `packages`.
/// Anything else selects the first package whose archive is named
/// `<identifier>.zip`; later duplicates are never considered.
///
/// # Arguments
///
/// - `packages` - The packages of the current index document.
/// - `identifier` - The identifier given on the command line.
///
/// # Returns
///
/// The selected [`Package`], or [`ResolveError`] if there is none.
pub fn resolve<'a>(
    packages: &'a PackageList,
    identifier: &str,
) -> Result<&'a Package, ResolveError> {
    if !identifier.is_empty() && identifier.bytes().all(|byte| byte.is_ascii_digit()) {
        return identifier
            .parse::<usize>()
            .ok()
            .and_then(|index| packages.get(index))
            .ok_or_else(|| ResolveError::OutOfRange {
                index: identifier.to_string(),
                len: packages.len(),
            });
    }

    let suffix = format!("/{identifier}.zip");
    packages
        .iter()
        .find(|package| package.url.ends_with(&suffix))
        .ok_or_else(|| ResolveError::NotFound {
            identifier: identifier.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, url: &str) -> Package {
        Package {
            name: name.to_string(),
            category: "c".to_string(),
            description: String::new(),
            url: url.to_string(),
        }
    }

    fn three_packages() -> PackageList {
        PackageList::new(vec![
            package("hw0", "https://example.com/snarf/hw0.zip"),
            package("hw1", "https://example.com/snarf/hw1.zip"),
            package("hw2", "https://example.com/snarf/hw2.zip"),
        ])
    }

    #[test]
    fn test_resolve_by_index() {
        let packages = three_packages();
        assert_eq!(resolve(&packages, "1").unwrap().name, "hw1");
        assert_eq!(resolve(&packages, "01").unwrap().name, "hw1");
    }

    #[test]
    fn test_index_out_of_range() {
        let packages = three_packages();
        assert_eq!(
            resolve(&packages, "5"),
            Err(ResolveError::OutOfRange {
                index: "5".to_string(),
                len: 3
            })
        );
        assert!(matches!(
            resolve(&packages, "99999999999999999999999"),
            Err(ResolveError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_resolve_by_archive_name() {
        let packages = three_packages();
        assert_eq!(
            resolve(&packages, "hw2").unwrap().url,
            "https://example.com/snarf/hw2.zip"
        );
    }

    #[test]
    fn test_first_duplicate_wins() {
        let packages = PackageList::new(vec![
            package("hw1", "https://example.com/snarf/2023/hw1.zip"),
            package("hw1", "https://example.com/snarf/2024/hw1.zip"),
        ]);
        assert_eq!(
            resolve(&packages, "hw1").unwrap().url,
            "https://example.com/snarf/2023/hw1.zip"
        );
    }

    #[test]
    fn test_name_must_match_whole_archive_name() {
        let packages = three_packages();
        assert_eq!(
            resolve(&packages, "w1"),
            Err(ResolveError::NotFound {
                identifier: "w1".to_string()
            })
        );
    }

    #[test]
    fn test_missing_identifier() {
        assert_eq!(require(None), Err(ResolveError::Missing));
        assert_eq!(require(Some("hw1")), Ok("hw1"));
    }
}
