// src/subcommand.rs

//! apt-cache subcommands

use crate::error::{Error, Result};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// A subcommand understood by apt-cache
///
/// The string form is exactly the name passed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Subcommand {
    /// Add package index files to the source cache
    Add,
    /// Rebuild the package and source caches
    Gencaches,
    /// General information about packages
    Showpkg,
    /// Cache statistics
    Stats,
    /// Source package records
    Showsrc,
    /// Short listing of every package in the cache
    Dump,
    /// Print an available file to stdout
    Dumpavail,
    /// Unmet dependencies in the cache
    Unmet,
    /// Package records
    Show,
    /// Regex search over names and descriptions
    Search,
    /// Dependencies of packages
    Depends,
    /// Reverse dependencies of packages
    Rdepends,
    /// Package names, optionally by prefix
    Pkgnames,
    /// Dependency graph in dot format
    Dotty,
    /// Dependency graph in VCG format
    Xvcg,
    /// Pin policy and candidate versions
    Policy,
    /// Available versions, madison-style
    Madison,
}

impl Subcommand {
    /// Name passed to apt-cache
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether apt-cache expects positional arguments after this subcommand
    pub fn takes_args(&self) -> bool {
        !matches!(
            self,
            Self::Gencaches | Self::Stats | Self::Dump | Self::Dumpavail | Self::Unmet
        )
    }

    /// Every subcommand, in declaration order
    pub fn all() -> impl Iterator<Item = Subcommand> {
        Self::iter()
    }
}

impl FromStr for Subcommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::iter()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| Error::ParseError(format!("Unknown apt-cache subcommand: {}", s)))
    }
}
