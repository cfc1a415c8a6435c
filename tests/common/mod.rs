// tests/common/mod.rs

//! Shared test utilities: fake apt-cache scripts.
//!
//! All scripts are written once, before any test spawns a process. Writing
//! an executable while another thread forks can leave the file busy
//! (ETXTBSY) when it is executed.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Fake tools by name: `/bin/sh` script bodies.
const SCRIPTS: &[(&str, &str)] = &[
    // Each argument on its own stderr line
    ("echo-args", r#"for arg in "$@"; do echo "$arg" >&2; done"#),
    (
        "stats",
        "echo 'Reading package lists...' >&2\n\
         echo 'Building dependency tree...' >&2\n\
         echo 'Total package names: 42' >&2",
    ),
    ("silent", "exit 0"),
    ("not-found", "echo 'E: No packages found' >&2\nexit 100"),
    ("partial-failure", "echo 'partial' >&2\nexit 1"),
    ("both-streams", "echo 'on stdout'\necho 'on stderr' >&2"),
    (
        "search",
        "echo 'vim - Vi IMproved'\n\
         echo 'vim-tiny - Vi IMproved, compact'\n\
         echo 'noise' >&2",
    ),
];

static TOOLS: OnceLock<TempDir> = OnceLock::new();

/// Path to the fake tool `name`, writing the whole set on first use.
pub fn fake_tool(name: &str) -> PathBuf {
    let dir = TOOLS.get_or_init(|| {
        let dir = tempfile::Builder::new()
            .prefix("fake-apt-cache")
            .tempdir_in(env!("CARGO_TARGET_TMPDIR"))
            .unwrap();
        for (tool, body) in SCRIPTS {
            let path = dir.path().join(tool);
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        dir
    });

    let path = dir.path().join(name);
    assert!(path.is_file(), "no fake tool named {}", name);
    path
}

/// Number of entries in a directory.
pub fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}
