use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(root: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("amalgamate");
    cmd.arg("--root")
        .arg(root.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let root = TempDir::new().expect("temp root");

    run_help(&root, &[]);
    run_help(&root, &["build"]);
    run_help(&root, &["check"]);
    run_help(&root, &["list"]);
    run_help(&root, &["includes"]);
}
