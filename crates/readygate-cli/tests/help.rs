use assert_cmd::Command;

/// Helper to get a Command for the readygate binary.
#[allow(deprecated)]
fn readygate_cmd() -> Command {
    Command::cargo_bin("readygate").unwrap()
}

#[test]
fn help_works() {
    readygate_cmd().arg("--help").assert().success();
}

#[test]
fn version_works() {
    readygate_cmd().arg("--version").assert().success();
}

#[test]
fn subcommand_helps_work() {
    for subcommand in ["analyze", "report", "sample", "explain"] {
        readygate_cmd()
            .args([subcommand, "--help"])
            .assert()
            .success();
    }
}

#[test]
fn unknown_subcommand_fails_with_usage() {
    readygate_cmd().arg("frobnicate").assert().failure().code(2);
}
