#![cfg(unix)]

use std::process::{Command, Output};

fn transcode(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_retro-cli"))
        .arg("transcode")
        .args(args)
        .output()
        .expect("run retro-cli transcode")
}

fn videos() -> tempfile::TempDir {
    let d = tempfile::tempdir().unwrap();
    for n in ["a.avi", "b.avi", "c.txt"] {
        std::fs::write(d.path().join(n), b"not really a video").unwrap();
    }
    d
}

#[test]
fn converts_only_avi_entries() {
    let src = videos();
    let out_dir = tempfile::tempdir().unwrap();
    let out = transcode(&[
        "--dir",
        src.path().to_str().unwrap(),
        "--out-dir",
        out_dir.path().to_str().unwrap(),
        "--tool",
        "true",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "{stdout}");
    assert!(lines[0].starts_with("Starting conversion of all videos to mp4 in "));
    assert_eq!(lines[1], "Found .avi file: a.avi, converting to a.mp4");
    assert_eq!(lines[2], "Found .avi file: b.avi, converting to b.mp4");
    assert!(lines[3].starts_with("Finished conversion of all videos to mp4"));
    assert!(!stdout.contains("c.txt"));
}

#[test]
fn tool_failures_surface_in_exit_status() {
    let src = videos();
    let out = transcode(&["--dir", src.path().to_str().unwrap(), "--out-dir", src.path().to_str().unwrap(), "--tool", "false"]);
    assert!(!out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("(converted=0 failed=2)"), "{stdout}");
    assert!(String::from_utf8_lossy(&out.stderr).contains("2 of 2 conversions failed"));
}

#[test]
fn missing_directory_fails() {
    let d = tempfile::tempdir().unwrap();
    let missing = d.path().join("videos");
    let out = transcode(&["--dir", missing.to_str().unwrap(), "--tool", "true"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("read dir"));
}

#[test]
fn dry_run_lists_absolute_paths() {
    let src = videos();
    let out = transcode(&["--dir", src.path().to_str().unwrap(), "--out-dir", "/tmp/out", "--dry-run", "--tool", "false"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let a_in = src.path().join("a.avi");
    assert!(stdout.contains(&format!("  -i {} /tmp/out/a.mp4", a_in.display())), "{stdout}");
}
