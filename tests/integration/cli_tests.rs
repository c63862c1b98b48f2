/*!
 * Tests that run the xamlcopy binary and check its stdout and exit status
 */

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use xamlcopy::COMPLETION_MESSAGE;
use crate::common;

// Run the binary from `cwd` with `home` as the user's home directory
fn run_xamlcopy(cwd: &Path, home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xamlcopy"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", home)
        .output()
        .expect("Failed to execute xamlcopy binary")
}

fn expected_stdout() -> String {
    format!("{}\n", COMPLETION_MESSAGE)
}

/// Test that a plain run converts into $HOME/Desktop and prints only the completion line
#[cfg(unix)]
#[test]
fn test_binary_withNoFlags_shouldUseCwdAndHomeDesktop() -> Result<()> {
    let dirs = common::create_test_dirs()?;
    let desktop = dirs.destination.path().join("Desktop");
    fs::create_dir(&desktop)?;
    common::create_test_file(dirs.source.path(), "a.XAML", "<Page/>")?;
    common::create_test_file(dirs.source.path(), "b.xaml", "<Grid/>")?;
    common::create_test_file(dirs.source.path(), "c.txt", "plain")?;

    let output = run_xamlcopy(dirs.source.path(), dirs.destination.path(), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, expected_stdout());
    assert_eq!(common::list_names(&desktop)?, vec!["a.XAML.txt", "b.xaml.txt"]);
    assert_eq!(fs::read_to_string(desktop.join("b.xaml.txt"))?, "<Grid/>");
    assert_eq!(
        common::list_names(dirs.source.path())?,
        vec!["a.XAML", "b.xaml", "c.txt"]
    );
    Ok(())
}

/// Test that a directory without matches still prints the completion line
#[cfg(unix)]
#[test]
fn test_binary_withNoMatches_shouldPrintCompletionLine() -> Result<()> {
    let dirs = common::create_test_dirs()?;
    let desktop = dirs.destination.path().join("Desktop");
    fs::create_dir(&desktop)?;
    common::create_test_file(dirs.source.path(), "readme.md", "# hi")?;

    let output = run_xamlcopy(dirs.source.path(), dirs.destination.path(), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, expected_stdout());
    assert!(common::list_names(&desktop)?.is_empty());
    Ok(())
}

/// Test that invalid bytes do not change the stdout contract
#[cfg(unix)]
#[test]
fn test_binary_withInvalidBytes_shouldSucceed() -> Result<()> {
    let dirs = common::create_test_dirs()?;
    let desktop = dirs.destination.path().join("Desktop");
    fs::create_dir(&desktop)?;
    common::create_test_file(dirs.source.path(), "bad.xaml", b"<Pa\xffge/>")?;

    let output = run_xamlcopy(dirs.source.path(), dirs.destination.path(), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, expected_stdout());
    assert_eq!(fs::read_to_string(desktop.join("bad.xaml.txt"))?, "<Page/>");
    Ok(())
}

/// Test that a failed run prints nothing on stdout and exits non-zero
#[cfg(unix)]
#[test]
fn test_binary_withMissingDesktop_shouldFailWithoutCompletionLine() -> Result<()> {
    let dirs = common::create_test_dirs()?;
    common::create_test_file(dirs.source.path(), "widget.xaml", "<Page/>")?;

    let output = run_xamlcopy(dirs.source.path(), dirs.destination.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("widget.xaml.txt"));
    assert!(!dirs.destination.path().join("Desktop").exists());
    Ok(())
}

/// Test that debug logging works when the working directory is not valid UTF-8
#[cfg(target_os = "linux")]
#[test]
fn test_binary_withDebugLogAndNonUtf8Cwd_shouldStillConvert() -> Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dirs = common::create_test_dirs()?;
    let desktop = dirs.destination.path().join("Desktop");
    fs::create_dir(&desktop)?;
    let cwd = dirs.source.path().join(OsStr::from_bytes(b"src_\xff"));
    fs::create_dir(&cwd)?;
    common::create_test_file(&cwd, "c.xaml", "<Page/>")?;

    let output = run_xamlcopy(&cwd, dirs.destination.path(), &["-l", "debug"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout)?, expected_stdout());
    assert!(desktop.join("c.xaml.txt").exists());
    Ok(())
}

/// Test that --destination-dir replaces the Desktop
#[test]
fn test_binary_withDestinationDirFlag_shouldMoveThere() -> Result<()> {
    let dirs = common::create_test_dirs()?;
    let home = common::create_temp_dir()?;
    common::create_test_file(dirs.source.path(), "widget.xaml", "<Page/>")?;
    let destination = dirs.destination.path().to_str().expect("temp path is UTF-8");

    let output = run_xamlcopy(
        dirs.source.path(),
        home.path(),
        &["--destination-dir", destination],
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, expected_stdout());
    assert!(dirs.destination.path().join("widget.xaml.txt").exists());
    assert!(!home.path().join("Desktop").exists());
    Ok(())
}
