// tests/cli.rs
use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("passgen").unwrap();
    cmd.env_remove("PASSGEN_LENGTH");
    cmd
}

#[test]
fn default_run_prints_an_eight_character_password() {
    cmd().assert().success().stdout(
        predicate::str::is_match(r"^[A-Za-z0-9!@#$%^&*()_+{}\[\]|:;<>,.?/~`]{8}\n$").unwrap(),
    );
}

#[test]
fn length_flag_controls_the_password_length() {
    cmd().args(["--length", "12"]).assert().success().stdout(
        predicate::str::is_match(r"^[A-Za-z0-9!@#$%^&*()_+{}\[\]|:;<>,.?/~`]{12}\n$").unwrap(),
    );
}

#[test]
fn length_can_come_from_the_environment() {
    cmd().env("PASSGEN_LENGTH", "20").assert().success().stdout(
        predicate::str::is_match(r"^[A-Za-z0-9!@#$%^&*()_+{}\[\]|:;<>,.?/~`]{20}\n$").unwrap(),
    );
}

#[test]
fn too_short_a_length_is_rejected() {
    cmd()
        .args(["--length", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 6 and 100"));
}

#[test]
fn too_long_a_length_is_rejected() {
    cmd()
        .args(["--length", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 6 and 100"));
}

#[test]
fn class_flags_narrow_the_pool_to_letters() {
    cmd()
        .args(["--no-digits", "--no-symbols", "--length", "6"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[A-Za-z]{6}\n$").unwrap());
}

#[test]
fn the_same_seed_reproduces_the_same_password() {
    let first = cmd().args(["--seed", "7"]).output().unwrap();
    let second = cmd().args(["--seed", "7"]).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn different_seeds_print_different_passwords() {
    let first = cmd().args(["--seed", "7", "--length", "32"]).output().unwrap();
    let second = cmd().args(["--seed", "8", "--length", "32"]).output().unwrap();

    assert_ne!(first.stdout, second.stdout);
}

#[test]
fn json_reports_the_policy_alongside_the_password() {
    cmd()
        .args(["--json", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""password""#))
        .stdout(predicate::str::contains(r#""length":8"#))
        .stdout(predicate::str::contains(r#""pool_size":89"#))
        .stdout(predicate::str::contains(r#""copied":false"#));
}

#[test]
fn json_reflects_a_narrowed_pool() {
    cmd()
        .args(["--json", "--no-digits"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""include_digits":false"#))
        .stdout(predicate::str::contains(r#""pool_size":79"#));
}

#[test]
fn help_names_the_class_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-digits"))
        .stdout(predicate::str::contains("--no-symbols"));
}
