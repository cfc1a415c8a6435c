// src/invoker.rs

//! Run apt-cache and capture its output
//!
//! Every subcommand goes through one routine:
//!
//! 1. Build the argument vector: rendered flags, subcommand name, positional args
//! 2. Create a temporary capture file
//! 3. Spawn the tool directly (no shell) with one stream redirected into the file
//! 4. On a zero exit status, read the file and keep only the last non-empty line
//! 5. On a non-zero status or a spawn failure, return `Failure` unread
//!
//! The capture file is a `NamedTempFile`, removed when the call returns on
//! every path.
//!
//! By default stderr is captured and stdout is inherited. This mirrors the
//! behaviour existing callers depend on, even though apt-cache writes its
//! useful output to stdout. `CaptureStream::Stdout` captures stdout instead.

use crate::config::CacheConfig;
use crate::error::{Error, Result};
use crate::subcommand::Subcommand;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Program run when no other is configured
pub const DEFAULT_PROGRAM: &str = "apt-cache";

/// Which output stream of the tool is captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureStream {
    /// Capture stderr, inherit stdout
    #[default]
    Stderr,
    /// Capture stdout, inherit stderr
    Stdout,
}

/// Outcome of a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationResult {
    /// Zero exit status; carries the last non-empty captured line (may be empty)
    Success(String),
    /// Non-zero exit status, or the tool could not be started
    Failure,
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The captured line, if the invocation succeeded
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Success(line) => Some(line),
            Self::Failure => None,
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Success(line) => Some(line),
            Self::Failure => None,
        }
    }
}

/// Runs apt-cache subcommands against a fixed option set
#[derive(Debug, Clone)]
pub struct CommandInvoker {
    program: PathBuf,
    config: CacheConfig,
    capture: CaptureStream,
    capture_dir: Option<PathBuf>,
}

impl CommandInvoker {
    /// Create an invoker for `apt-cache` with the given options
    pub fn new(config: CacheConfig) -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            config,
            capture: CaptureStream::default(),
            capture_dir: None,
        }
    }

    /// Run a different program (name on PATH or explicit path)
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_capture(mut self, capture: CaptureStream) -> Self {
        self.capture = capture;
        self
    }

    /// Create capture files in `dir` instead of the system temp directory
    pub fn with_capture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.capture_dir = Some(dir.into());
        self
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn capture(&self) -> CaptureStream {
        self.capture
    }

    /// Check whether the program can be found
    pub fn is_available(&self) -> bool {
        if self.program.components().count() > 1 {
            return self.program.is_file();
        }
        which::which(&self.program).is_ok()
    }

    /// Arguments passed to the program: flags, subcommand, positional args
    pub fn command_args<S: AsRef<str>>(&self, subcommand: Subcommand, args: &[S]) -> Vec<String> {
        let mut argv = self.config.flag_args();
        argv.push(subcommand.as_str().to_string());
        argv.extend(args.iter().map(|a| a.as_ref().to_string()));
        argv
    }

    /// Space-joined command line, for display only
    pub fn command_line<S: AsRef<str>>(&self, subcommand: Subcommand, args: &[S]) -> String {
        self.display_line(&self.command_args(subcommand, args))
    }

    fn display_line(&self, argv: &[String]) -> String {
        let mut line = self.program.display().to_string();
        for arg in argv {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run a subcommand, collapsing every failure into `InvocationResult::Failure`
    pub fn invoke<S: AsRef<str>>(&self, subcommand: Subcommand, args: &[S]) -> InvocationResult {
        match self.try_invoke(subcommand, args) {
            Ok(line) => InvocationResult::Success(line),
            Err(e) => {
                debug!("apt-cache {} failed: {}", subcommand, e);
                InvocationResult::Failure
            }
        }
    }

    /// Run a subcommand, keeping the failure detail
    pub fn try_invoke<S: AsRef<str>>(&self, subcommand: Subcommand, args: &[S]) -> Result<String> {
        if !subcommand.takes_args() && !args.is_empty() {
            warn!(
                "apt-cache {} takes no arguments, passing {} anyway",
                subcommand,
                args.len()
            );
        }

        let argv = self.command_args(subcommand, args);
        let line = self.display_line(&argv);
        debug!("Running: {}", line);

        let capture = match &self.capture_dir {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new()?,
        };
        let sink = Stdio::from(capture.reopen()?);

        let mut cmd = Command::new(&self.program);
        cmd.args(&argv).stdin(Stdio::null());
        match self.capture {
            CaptureStream::Stderr => cmd.stderr(sink),
            CaptureStream::Stdout => cmd.stdout(sink),
        };

        let status = cmd.status().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ToolNotFound(format!("{}: {}", self.program.display(), e))
            } else {
                Error::IoError(format!("Failed to run {}: {}", self.program.display(), e))
            }
        })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: line,
                code: status.code().unwrap_or(-1),
            });
        }

        let (last, count) = last_line(BufReader::new(capture.reopen()?))?;
        debug!("Captured {} lines from apt-cache {}", count, subcommand);
        Ok(last)
    }

    pub fn add<S: AsRef<str>>(&self, files: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Add, files)
    }

    pub fn gencaches(&self) -> InvocationResult {
        self.invoke::<&str>(Subcommand::Gencaches, &[])
    }

    pub fn showpkg<S: AsRef<str>>(&self, packages: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Showpkg, packages)
    }

    pub fn stats(&self) -> InvocationResult {
        self.invoke::<&str>(Subcommand::Stats, &[])
    }

    pub fn showsrc<S: AsRef<str>>(&self, packages: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Showsrc, packages)
    }

    pub fn dump(&self) -> InvocationResult {
        self.invoke::<&str>(Subcommand::Dump, &[])
    }

    pub fn dumpavail(&self) -> InvocationResult {
        self.invoke::<&str>(Subcommand::Dumpavail, &[])
    }

    pub fn unmet(&self) -> InvocationResult {
        self.invoke::<&str>(Subcommand::Unmet, &[])
    }

    pub fn show<S: AsRef<str>>(&self, packages: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Show, packages)
    }

    /// Patterns are POSIX regexes, interpreted by apt-cache
    pub fn search<S: AsRef<str>>(&self, patterns: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Search, patterns)
    }

    pub fn depends<S: AsRef<str>>(&self, packages: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Depends, packages)
    }

    pub fn rdepends<S: AsRef<str>>(&self, packages: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Rdepends, packages)
    }

    pub fn pkgnames<S: AsRef<str>>(&self, prefixes: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Pkgnames, prefixes)
    }

    pub fn dotty<S: AsRef<str>>(&self, packages: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Dotty, packages)
    }

    pub fn xvcg<S: AsRef<str>>(&self, packages: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Xvcg, packages)
    }

    pub fn policy<S: AsRef<str>>(&self, packages: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Policy, packages)
    }

    pub fn madison<S: AsRef<str>>(&self, packages: &[S]) -> InvocationResult {
        self.invoke(Subcommand::Madison, packages)
    }
}

impl Default for CommandInvoker {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

/// Read to the end, returning the last non-empty line and the line count
///
/// Invalid UTF-8 is replaced rather than rejected.
fn last_line(mut reader: BufReader<File>) -> Result<(String, usize)> {
    let mut buf = Vec::new();
    let mut last = String::new();
    let mut count = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        count += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if !line.trim().is_empty() {
            last = line.to_string();
        }
    }

    Ok((last, count))
}
