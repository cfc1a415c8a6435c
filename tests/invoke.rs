// tests/invoke.rs

//! Invocation tests against a fake apt-cache: capture, failure, cleanup.

#![cfg(unix)]

mod common;

use aptcache::{CacheConfig, CaptureStream, CommandInvoker, Error, InvocationResult, Subcommand};
use common::{entry_count, fake_tool};

#[test]
fn test_returns_last_of_many_lines() {
    let invoker = CommandInvoker::default().with_program(fake_tool("stats"));
    assert_eq!(
        invoker.stats(),
        InvocationResult::Success("Total package names: 42".to_string())
    );
}

#[test]
fn test_no_output_is_empty_success() {
    let invoker = CommandInvoker::default().with_program(fake_tool("silent"));
    assert_eq!(invoker.unmet(), InvocationResult::Success(String::new()));
}

#[test]
fn test_arguments_reach_tool_in_order() {
    let invoker = CommandInvoker::default().with_program(fake_tool("echo-args"));
    let last = invoker.try_invoke(Subcommand::Show, &["vim", "curl"]).unwrap();
    assert_eq!(last, "curl");

    let config = CacheConfig {
        quiet: Some("2".to_string()),
        ..Default::default()
    };
    let invoker = CommandInvoker::new(config).with_program(fake_tool("echo-args"));
    assert_eq!(invoker.stats().output(), Some("stats"));
}

#[test]
fn test_arguments_bypass_shell() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("injected");
    let hostile = format!("vim; touch {}", marker.display());

    let invoker = CommandInvoker::default().with_program(fake_tool("echo-args"));
    let result = invoker.show(&[hostile.as_str()]);

    assert_eq!(result.output(), Some(hostile.as_str()));
    assert!(!marker.exists());
}

#[test]
fn test_flag_value_passed_as_one_argument() {
    let config = CacheConfig {
        pkg_cache: Some("/tmp/my cache.bin".to_string()),
        ..Default::default()
    };
    let invoker = CommandInvoker::new(config).with_program(fake_tool("echo-args"));

    assert_eq!(
        invoker.command_args::<&str>(Subcommand::Dump, &[]),
        vec!["--pkg-cache", "/tmp/my cache.bin", "dump"]
    );
    assert_eq!(invoker.dump().output(), Some("dump"));
}

#[test]
fn test_failure_exit_status() {
    let invoker = CommandInvoker::default().with_program(fake_tool("not-found"));
    assert_eq!(invoker.show(&["nonexistent"]), InvocationResult::Failure);

    match invoker.try_invoke(Subcommand::Show, &["nonexistent"]) {
        Err(Error::CommandFailed { command, code }) => {
            assert_eq!(code, 100);
            assert!(command.ends_with("show nonexistent"));
        }
        other => panic!("expected CommandFailed, got {:?}", other),
    }
}

#[test]
fn test_missing_tool_is_failure() {
    // scripts must exist before this test forks
    fake_tool("silent");
    let dir = tempfile::tempdir().unwrap();
    let invoker = CommandInvoker::default().with_program(dir.path().join("no-such-tool"));

    assert!(!invoker.is_available());
    assert_eq!(invoker.policy(&["vim"]), InvocationResult::Failure);
    assert!(matches!(
        invoker.try_invoke(Subcommand::Policy, &["vim"]),
        Err(Error::ToolNotFound(_))
    ));
}

#[test]
fn test_fake_tool_is_available() {
    let invoker = CommandInvoker::default().with_program(fake_tool("silent"));
    assert!(invoker.is_available());
}

#[test]
fn test_capture_file_removed_on_success() {
    let capture_dir = tempfile::tempdir().unwrap();
    let invoker = CommandInvoker::default()
        .with_program(fake_tool("echo-args"))
        .with_capture_dir(capture_dir.path());

    assert!(invoker.depends(&["libc6"]).is_success());
    assert_eq!(entry_count(capture_dir.path()), 0);
}

#[test]
fn test_capture_file_removed_on_failure() {
    let capture_dir = tempfile::tempdir().unwrap();
    let invoker = CommandInvoker::default()
        .with_program(fake_tool("partial-failure"))
        .with_capture_dir(capture_dir.path());

    assert_eq!(invoker.rdepends(&["libc6"]), InvocationResult::Failure);
    assert_eq!(entry_count(capture_dir.path()), 0);
}

#[test]
fn test_capture_file_removed_when_tool_missing() {
    fake_tool("silent");
    let dir = tempfile::tempdir().unwrap();
    let capture_dir = tempfile::tempdir().unwrap();
    let invoker = CommandInvoker::default()
        .with_program(dir.path().join("missing"))
        .with_capture_dir(capture_dir.path());

    assert_eq!(invoker.madison(&["vim"]), InvocationResult::Failure);
    assert_eq!(entry_count(capture_dir.path()), 0);
}

#[test]
fn test_stderr_capture_ignores_stdout() {
    let invoker = CommandInvoker::default().with_program(fake_tool("both-streams"));
    assert_eq!(invoker.search(&["^vim"]).output(), Some("on stderr"));
}

#[test]
fn test_stdout_capture_mode() {
    let invoker = CommandInvoker::default()
        .with_program(fake_tool("search"))
        .with_capture(CaptureStream::Stdout);
    assert_eq!(
        invoker.search(&["vim"]).output(),
        Some("vim-tiny - Vi IMproved, compact")
    );
}

#[test]
fn test_every_subcommand_reaches_tool() {
    let invoker = CommandInvoker::default().with_program(fake_tool("echo-args"));

    for sub in Subcommand::all() {
        let args: Vec<&str> = if sub.takes_args() { vec!["pkg"] } else { Vec::new() };
        let expected = if sub.takes_args() { "pkg" } else { sub.as_str() };
        assert_eq!(invoker.invoke(sub, &args).output(), Some(expected), "{}", sub);
    }
}

#[test]
fn test_typed_wrappers() {
    let invoker = CommandInvoker::default().with_program(fake_tool("echo-args"));

    assert_eq!(invoker.add(&["Packages"]).output(), Some("Packages"));
    assert_eq!(invoker.gencaches().output(), Some("gencaches"));
    assert_eq!(invoker.showpkg(&["vim"]).output(), Some("vim"));
    assert_eq!(invoker.showsrc(&["vim"]).output(), Some("vim"));
    assert_eq!(invoker.dumpavail().output(), Some("dumpavail"));
    assert_eq!(invoker.pkgnames(&["li"]).output(), Some("li"));
    assert_eq!(invoker.dotty(&["vim"]).output(), Some("vim"));
    assert_eq!(invoker.xvcg(&["vim"]).output(), Some("vim"));
    assert_eq!(invoker.show(&["vim", "curl"]).output(), Some("curl"));
}
