// src/config.rs

//! apt-cache option set and flag rendering
//!
//! `CacheConfig` is an immutable snapshot of every option the wrapper
//! knows how to pass to apt-cache. Each field maps 1:1 to one of the
//! tool's long options. Unset fields are omitted from the command line.
//!
//! Flags are always rendered in the same order (not alphabetical):
//!
//! ```text
//! --option --config-file --version --installed --recurse --all-names
//! --names-only --generate --all-versions --full --no-pre-depends
//! --no-depends --no-recommends --no-suggests --no-conflicts --no-breaks
//! --no-replaces --no-enhances --important --quiet --src-cache --pkg-cache
//! ```
//!
//! apt-cache applies repeated `--option` overrides in order, so a stable
//! order keeps two invocations with equal configs byte-identical.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Options passed through to apt-cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Package cache file (Dir::Cache::pkgcache)
    pub pkg_cache: Option<String>,
    /// Source cache file (Dir::Cache::srcpkgcache)
    pub src_cache: Option<String>,
    /// Quiet; may carry a numeric level such as "2"
    pub quiet: Option<String>,
    /// Only Depends and Pre-Depends (APT::Cache::Important)
    pub important: bool,
    /// Full package records when searching (APT::Cache::ShowFull)
    pub full: bool,
    /// Search package names only (APT::Cache::NamesOnly)
    pub names_only: bool,
    /// pkgnames includes virtual packages (APT::Cache::AllNames)
    pub all_names: bool,
    /// Recursive depends/rdepends (APT::Cache::RecurseDepends)
    pub recurse: bool,
    /// Limit depends/rdepends to installed packages (APT::Cache::Installed)
    pub installed: bool,
    /// Full records for all versions (APT::Cache::AllVersions)
    pub all_versions: bool,
    /// Regenerate the cache before use (APT::Cache::Generate)
    pub generate: bool,
    /// Print the tool's version
    pub version: bool,
    pub no_pre_depends: bool,
    pub no_depends: bool,
    pub no_recommends: bool,
    pub no_suggests: bool,
    pub no_conflicts: bool,
    pub no_breaks: bool,
    pub no_replaces: bool,
    pub no_enhances: bool,
    /// Alternate apt configuration file
    pub config_file: Option<String>,
    /// Raw configuration override, e.g. `APT::Cache::Generate=false`
    pub option: Option<String>,
}

impl CacheConfig {
    /// Create an empty configuration (no flags rendered)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document whose keys are the field names
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading apt-cache options from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            Error::ParseError(msg) => {
                Error::ParseError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Layer `overrides` on top of this configuration
    ///
    /// Booleans are set if set in either; strings come from `overrides`
    /// when it has a non-empty value.
    pub fn merge(self, overrides: &CacheConfig) -> CacheConfig {
        fn pick(base: Option<String>, over: &Option<String>) -> Option<String> {
            match over {
                Some(v) if !v.is_empty() => Some(v.clone()),
                _ => base,
            }
        }

        CacheConfig {
            pkg_cache: pick(self.pkg_cache, &overrides.pkg_cache),
            src_cache: pick(self.src_cache, &overrides.src_cache),
            quiet: pick(self.quiet, &overrides.quiet),
            important: self.important || overrides.important,
            full: self.full || overrides.full,
            names_only: self.names_only || overrides.names_only,
            all_names: self.all_names || overrides.all_names,
            recurse: self.recurse || overrides.recurse,
            installed: self.installed || overrides.installed,
            all_versions: self.all_versions || overrides.all_versions,
            generate: self.generate || overrides.generate,
            version: self.version || overrides.version,
            no_pre_depends: self.no_pre_depends || overrides.no_pre_depends,
            no_depends: self.no_depends || overrides.no_depends,
            no_recommends: self.no_recommends || overrides.no_recommends,
            no_suggests: self.no_suggests || overrides.no_suggests,
            no_conflicts: self.no_conflicts || overrides.no_conflicts,
            no_breaks: self.no_breaks || overrides.no_breaks,
            no_replaces: self.no_replaces || overrides.no_replaces,
            no_enhances: self.no_enhances || overrides.no_enhances,
            config_file: pick(self.config_file, &overrides.config_file),
            option: pick(self.option, &overrides.option),
        }
    }

    /// Render the flags as an argument vector, in the fixed order
    ///
    /// Values are passed as separate elements and are never quoted or
    /// escaped; the process is spawned without a shell.
    pub fn flag_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        fn value(name: &str, v: &Option<String>, args: &mut Vec<String>) {
            if let Some(v) = v.as_deref().filter(|v| !v.is_empty()) {
                args.push(format!("--{}", name));
                args.push(v.to_string());
            }
        }

        value("option", &self.option, &mut args);
        value("config-file", &self.config_file, &mut args);

        let switches = [
            ("version", self.version),
            ("installed", self.installed),
            ("recurse", self.recurse),
            ("all-names", self.all_names),
            ("names-only", self.names_only),
            ("generate", self.generate),
            ("all-versions", self.all_versions),
            ("full", self.full),
            ("no-pre-depends", self.no_pre_depends),
            ("no-depends", self.no_depends),
            ("no-recommends", self.no_recommends),
            ("no-suggests", self.no_suggests),
            ("no-conflicts", self.no_conflicts),
            ("no-breaks", self.no_breaks),
            ("no-replaces", self.no_replaces),
            ("no-enhances", self.no_enhances),
            ("important", self.important),
        ];
        args.extend(
            switches
                .iter()
                .filter(|(_, on)| *on)
                .map(|(name, _)| format!("--{}", name)),
        );

        value("quiet", &self.quiet, &mut args);
        value("src-cache", &self.src_cache, &mut args);
        value("pkg-cache", &self.pkg_cache, &mut args);

        args
    }

    /// Render the flags as a single space-separated string
    pub fn render_flags(&self) -> String {
        self.flag_args().join(" ")
    }
}
