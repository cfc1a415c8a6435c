// src/cli.rs
//! CLI definitions for the aptcache binary
//!
//! This module contains the command-line interface definitions using clap.
//! Dispatch lives in `main.rs`.

use aptcache::{CacheConfig, CaptureStream, Subcommand};
use clap::{Args, Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aptcache")]
#[command(author = "Aptcache Contributors")]
#[command(version)]
#[command(about = "Run apt-cache subcommands and print the last captured line", long_about = None)]
pub struct Cli {
    /// TOML file with default apt-cache options (flags below take precedence)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Program to run instead of apt-cache
    #[arg(long, value_name = "PATH", default_value = aptcache::DEFAULT_PROGRAM)]
    pub program: PathBuf,

    /// Output stream to capture
    #[arg(long, value_enum, default_value = "stderr")]
    pub capture: CaptureArg,

    /// Print the command line without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub options: AptOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Stream selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaptureArg {
    Stderr,
    Stdout,
}

impl From<CaptureArg> for CaptureStream {
    fn from(arg: CaptureArg) -> Self {
        match arg {
            CaptureArg::Stderr => CaptureStream::Stderr,
            CaptureArg::Stdout => CaptureStream::Stdout,
        }
    }
}

/// Options passed through to apt-cache
#[derive(Args, Debug, Default)]
pub struct AptOptions {
    /// Package cache file
    #[arg(long, value_name = "FILE")]
    pub pkg_cache: Option<String>,

    /// Source cache file
    #[arg(long, value_name = "FILE")]
    pub src_cache: Option<String>,

    /// Quiet output level
    #[arg(short, long, value_name = "LEVEL")]
    pub quiet: Option<String>,

    /// Only Depends and Pre-Depends relations
    #[arg(short, long)]
    pub important: bool,

    /// Full package records when searching
    #[arg(short, long)]
    pub full: bool,

    /// Search on package names only
    #[arg(short, long)]
    pub names_only: bool,

    /// pkgnames prints all names, including virtual packages
    #[arg(long)]
    pub all_names: bool,

    /// Recursive depends and rdepends
    #[arg(long)]
    pub recurse: bool,

    /// Limit depends and rdepends to installed packages
    #[arg(long)]
    pub installed: bool,

    /// Full records for all available versions
    #[arg(short, long)]
    pub all_versions: bool,

    /// Regenerate the package cache automatically
    #[arg(short, long)]
    pub generate: bool,

    /// Pass --version to apt-cache
    #[arg(long)]
    pub apt_version: bool,

    #[arg(long)]
    pub no_pre_depends: bool,

    #[arg(long)]
    pub no_depends: bool,

    #[arg(long)]
    pub no_recommends: bool,

    #[arg(long)]
    pub no_suggests: bool,

    #[arg(long)]
    pub no_conflicts: bool,

    #[arg(long)]
    pub no_breaks: bool,

    #[arg(long)]
    pub no_replaces: bool,

    #[arg(long)]
    pub no_enhances: bool,

    /// apt configuration file (passed as --config-file)
    #[arg(long, value_name = "FILE")]
    pub apt_config_file: Option<String>,

    /// Raw configuration override, e.g. APT::Cache::Generate=false
    #[arg(short, long, value_name = "KEY=VALUE")]
    pub option: Option<String>,
}

impl AptOptions {
    pub fn to_config(&self) -> CacheConfig {
        CacheConfig {
            pkg_cache: self.pkg_cache.clone(),
            src_cache: self.src_cache.clone(),
            quiet: self.quiet.clone(),
            important: self.important,
            full: self.full,
            names_only: self.names_only,
            all_names: self.all_names,
            recurse: self.recurse,
            installed: self.installed,
            all_versions: self.all_versions,
            generate: self.generate,
            version: self.apt_version,
            no_pre_depends: self.no_pre_depends,
            no_depends: self.no_depends,
            no_recommends: self.no_recommends,
            no_suggests: self.no_suggests,
            no_conflicts: self.no_conflicts,
            no_breaks: self.no_breaks,
            no_replaces: self.no_replaces,
            no_enhances: self.no_enhances,
            config_file: self.apt_config_file.clone(),
            option: self.option.clone(),
        }
    }
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add package index files to the source cache
    Add {
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Rebuild the package and source caches
    Gencaches,

    /// Show general information about packages
    Showpkg {
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Show cache statistics
    Stats,

    /// Show source package records
    Showsrc {
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// List every package in the cache
    Dump,

    /// Print an available file
    Dumpavail,

    /// Show unmet dependencies
    Unmet,

    /// Show package records
    Show {
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Search package names and descriptions by regex
    Search {
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Show dependencies of packages
    Depends {
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Show reverse dependencies of packages
    Rdepends {
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// List package names, optionally by prefix
    Pkgnames {
        prefixes: Vec<String>,
    },

    /// Dependency graph in dot format
    Dotty {
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Dependency graph in VCG format
    Xvcg {
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Show pin policy and candidate versions
    Policy {
        packages: Vec<String>,
    },

    /// Show available versions, madison-style
    Madison {
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// The apt-cache request this command maps to, if any
    pub fn into_request(self) -> Option<(Subcommand, Vec<String>)> {
        let request = match self {
            Commands::Add { files } => (Subcommand::Add, files),
            Commands::Gencaches => (Subcommand::Gencaches, Vec::new()),
            Commands::Showpkg { packages } => (Subcommand::Showpkg, packages),
            Commands::Stats => (Subcommand::Stats, Vec::new()),
            Commands::Showsrc { packages } => (Subcommand::Showsrc, packages),
            Commands::Dump => (Subcommand::Dump, Vec::new()),
            Commands::Dumpavail => (Subcommand::Dumpavail, Vec::new()),
            Commands::Unmet => (Subcommand::Unmet, Vec::new()),
            Commands::Show { packages } => (Subcommand::Show, packages),
            Commands::Search { patterns } => (Subcommand::Search, patterns),
            Commands::Depends { packages } => (Subcommand::Depends, packages),
            Commands::Rdepends { packages } => (Subcommand::Rdepends, packages),
            Commands::Pkgnames { prefixes } => (Subcommand::Pkgnames, prefixes),
            Commands::Dotty { packages } => (Subcommand::Dotty, packages),
            Commands::Xvcg { packages } => (Subcommand::Xvcg, packages),
            Commands::Policy { packages } => (Subcommand::Policy, packages),
            Commands::Madison { packages } => (Subcommand::Madison, packages),
            Commands::Completions { .. } => return None,
        };
        Some(request)
    }
}
