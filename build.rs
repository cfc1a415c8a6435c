// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// apt-cache switches passed straight through
const SWITCHES: &[(&str, &str)] = &[
    ("important", "Only Depends and Pre-Depends relations"),
    ("full", "Full package records when searching"),
    ("names-only", "Search on package names only"),
    ("all-names", "pkgnames prints all names, including virtual packages"),
    ("recurse", "Recursive depends and rdepends"),
    ("installed", "Limit depends and rdepends to installed packages"),
    ("all-versions", "Full records for all available versions"),
    ("generate", "Regenerate the package cache automatically"),
    ("apt-version", "Pass --version to apt-cache"),
    ("no-pre-depends", "Omit Pre-Depends"),
    ("no-depends", "Omit Depends"),
    ("no-recommends", "Omit Recommends"),
    ("no-suggests", "Omit Suggests"),
    ("no-conflicts", "Omit Conflicts"),
    ("no-breaks", "Omit Breaks"),
    ("no-replaces", "Omit Replaces"),
    ("no-enhances", "Omit Enhances"),
];

/// apt-cache options that carry a value
const VALUES: &[(&str, &str)] = &[
    ("pkg-cache", "Package cache file"),
    ("src-cache", "Source cache file"),
    ("quiet", "Quiet output level"),
    ("apt-config-file", "apt configuration file"),
    ("option", "Raw configuration override"),
];

/// Subcommands, and whether they take positional arguments
const SUBCOMMANDS: &[(&str, &str, bool)] = &[
    ("add", "Add package index files to the source cache", true),
    ("gencaches", "Rebuild the package and source caches", false),
    ("showpkg", "Show general information about packages", true),
    ("stats", "Show cache statistics", false),
    ("showsrc", "Show source package records", true),
    ("dump", "List every package in the cache", false),
    ("dumpavail", "Print an available file", false),
    ("unmet", "Show unmet dependencies", false),
    ("show", "Show package records", true),
    ("search", "Search package names and descriptions by regex", true),
    ("depends", "Show dependencies of packages", true),
    ("rdepends", "Show reverse dependencies of packages", true),
    ("pkgnames", "List package names, optionally by prefix", true),
    ("dotty", "Dependency graph in dot format", true),
    ("xvcg", "Dependency graph in VCG format", true),
    ("policy", "Show pin policy and candidate versions", true),
    ("madison", "Show available versions, madison-style", true),
];

fn build_cli() -> Command {
    let mut cmd = Command::new("aptcache")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Aptcache Contributors")
        .about("Run apt-cache subcommands and print the last captured line")
        .arg(Arg::new("config").long("config").value_name("FILE").help("TOML file with default apt-cache options"))
        .arg(Arg::new("program").long("program").value_name("PATH").default_value("apt-cache").help("Program to run instead of apt-cache"))
        .arg(
            Arg::new("capture")
                .long("capture")
                .value_parser(["stderr", "stdout"])
                .default_value("stderr")
                .help("Output stream to capture"),
        )
        .arg(Arg::new("dry_run").long("dry-run").action(ArgAction::SetTrue).help("Print the command line without running it"))
        .arg(Arg::new("verbose").short('v').long("verbose").action(ArgAction::SetTrue).help("Enable debug logging"));

    for (name, help) in SWITCHES {
        cmd = cmd.arg(Arg::new(*name).long(*name).action(ArgAction::SetTrue).help(*help));
    }
    for (name, help) in VALUES {
        cmd = cmd.arg(Arg::new(*name).long(*name).help(*help));
    }
    for (name, about, takes_args) in SUBCOMMANDS {
        let mut sub = Command::new(*name).about(*about);
        if *takes_args {
            sub = sub.arg(Arg::new("args").num_args(1..).help("Packages, files, patterns or prefixes"));
        }
        cmd = cmd.subcommand(sub);
    }

    cmd.subcommand(
        Command::new("completions")
            .about("Generate shell completions")
            .arg(
                Arg::new("shell")
                    .required(true)
                    .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                    .help("Shell type"),
            ),
    )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("aptcache.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
