//! # Package Schema
//!
//! This module defines the packages parsed out of the portal's index
//! document.

use std::slice::Iter;

/// One downloadable assignment package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Display name; also the directory the package is extracted into.
    pub name: String,
    /// Free-text grouping label.
    pub category: String,
    /// Free-text description, possibly empty.
    pub description: String,
    /// Fully qualified location of the package's `.zip` archive.
    pub url: String,
}

/// The packages of one index document, in document order.
///
/// Positions in the list are the indices users select packages by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageList {
    packages: Vec<Package>,
}

impl PackageList {
    /// Wraps packages that are already in document order.
    pub fn new(packages: Vec<Package>) -> PackageList {
        PackageList { packages }
    }

    /// Returns the package at zero-based position `index`.
    pub fn get(&self, index: usize) -> Option<&Package> {
        self.packages.get(index)
    }

    /// Iterates over the packages in document order.
    pub fn iter(&self) -> Iter<'_, Package> {
        self.packages.iter()
    }

    /// The number of packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// True if the document listed no usable packages.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<'a> IntoIterator for &'a PackageList {
    type Item = &'a Package;
    type IntoIter = Iter<'a, Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
