#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::Mutex;

use predicates::prelude::*;
use tempfile::TempDir;
use ymw16_query::{ModelInvoker, QueryError};

// Writing an executable while another test forks can leave it busy (ETXTBSY).
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn fake_tool(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("ymw16");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Answers like the model, echoing the coordinates back. Refuses anything but
/// `-o Gal <gl> <gb> <dm> 1`.
const ECHO_MODEL: &str = r#"[ "$#" -eq 6 ] && [ "$1" = "-o" ] && [ "$2" = "Gal" ] && [ "$6" = "1" ] || { echo "bad args: $*" >&2; exit 9; }
echo "Gal;$3;$4;$5;80.0;5000.0;2.0""#;

#[test]
fn invoker_runs_real_process() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let tool = fake_tool(&dir, ECHO_MODEL);

    let rec = ModelInvoker::with_tool(tool.to_string_lossy())
        .query(10.0, -5.0, 100.0)
        .unwrap();
    assert_eq!(rec.mode, "Gal");
    assert_eq!((rec.gl, rec.gb, rec.dm), (10.0, -5.0, 100.0));
    assert!((rec.dist - 5.0).abs() < 1e-12);
    assert!((rec.taus - 100.0).abs() < 1e-9);
}

#[test]
fn invoker_surfaces_exit_code_and_stderr() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let tool = fake_tool(
        &dir,
        "echo 'Gal;1;2;3;4;5;6'\necho 'cannot read ymw16par.txt' >&2\nexit 4",
    );

    let err = ModelInvoker::with_tool(tool.to_string_lossy())
        .query(1.0, 2.0, 3.0)
        .unwrap_err();
    match err {
        QueryError::Exit { code, stderr, .. } => {
            assert_eq!(code, Some(4));
            assert!(stderr.contains("ymw16par.txt"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn cli_prints_fields_and_completion_message() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let tool = fake_tool(&dir, ECHO_MODEL);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ymw16_query");
    cmd.arg("--tool").arg(&tool).args(["10.0", "5.0", "100.0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("mode       Gal"))
        .stdout(predicate::str::contains("dm_gal           80"))
        .stdout(predicate::str::contains("dist              5"))
        .stdout(predicate::str::ends_with("All done.\n"));
}

#[test]
fn cli_prints_json_record() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let tool = fake_tool(&dir, ECHO_MODEL);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ymw16_query");
    cmd.arg("--json")
        .arg("--tool")
        .arg(&tool)
        .args(["45.0", "-1.5", "250.0"]);

    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["mode"], "Gal");
    assert_eq!(v["gb"], -1.5);
    assert_eq!(v["dm"], 250.0);
    assert!((v["taus"].as_f64().unwrap() - 100.0).abs() < 1e-9);
}

#[test]
fn cli_debug_logging_shows_command_line() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let tool = fake_tool(&dir, ECHO_MODEL);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ymw16_query");
    cmd.env_remove("RUST_LOG")
        .arg("-vv")
        .arg("--tool")
        .arg(&tool)
        .args(["10.0", "5.0", "100.0"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("DEBUG: running"))
        .stderr(predicate::str::contains("-o Gal 10 5 100 1"))
        .stderr(predicate::str::contains("INFO: Gal: dist 5 kpc"));
}
