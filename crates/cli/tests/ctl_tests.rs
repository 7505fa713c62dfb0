// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use assert_cmd::Command;

#[test]
fn prints_help() {
    Command::cargo_bin("detectmate-ctl").unwrap().arg("--help").assert().success();
}

#[test]
fn status_against_an_unreachable_url_fails_cleanly() {
    Command::cargo_bin("detectmate-ctl")
        .unwrap()
        .args(["--url", "http://127.0.0.1:1", "status"])
        .assert()
        .failure();
}

#[test]
fn reconfigure_with_a_missing_file_fails() {
    Command::cargo_bin("detectmate-ctl")
        .unwrap()
        .args(["reconfigure", "/nonexistent/config.yaml"])
        .assert()
        .failure();
}

#[test]
fn launcher_prints_help() {
    Command::cargo_bin("detectmate-launcher").unwrap().arg("--help").assert().success();
}
