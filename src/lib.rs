// src/lib.rs

//! Typed wrapper around `apt-cache`
//!
//! Exposes the apt-cache subcommands (query, statistics, search,
//! dependency listing, graph export) as method calls on a
//! [`CommandInvoker`]. Each call renders a [`CacheConfig`] into flags,
//! runs the tool as a child process and returns the last captured line
//! of output, or [`InvocationResult::Failure`].
//!
//! # Architecture
//!
//! - Options are an immutable value passed into the invoker, never shared state
//! - The tool is spawned with an argument vector, never through a shell
//! - One capture routine serves every subcommand
//!
//! # Example
//!
//! ```ignore
//! use aptcache::{CacheConfig, CommandInvoker};
//!
//! let config = CacheConfig { quiet: Some("2".into()), ..Default::default() };
//! let invoker = CommandInvoker::new(config);
//! let result = invoker.show(&["vim", "curl"]);
//! ```

pub mod config;
mod error;
pub mod invoker;
pub mod subcommand;

pub use config::CacheConfig;
pub use error::{Error, Result};
pub use invoker::{CaptureStream, CommandInvoker, InvocationResult, DEFAULT_PROGRAM};
pub use subcommand::Subcommand;
