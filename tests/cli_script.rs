use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("budget_ledger_cli").expect("binary builds")
}

#[test]
fn script_prints_summary_and_chart() {
    let dir = tempdir().expect("tempdir");
    let script = "\
category Food
category Auto
deposit Food 900 deposit
deposit Auto 500 deposit
withdraw Food 105.55 \"groceries and dining\"
withdraw Auto 32 fuel
show Food
chart
";

    cli()
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "*************Food*************\n\
             deposit                 900.00\n\
             groceries and dining    -105.55\n\
             Total: 794.45\n",
        ))
        .stdout(predicate::str::contains(" 70| o     \n"))
        .stdout(predicate::str::ends_with("     d  o  \n"));
}

#[test]
fn capped_amounts_follow_config_file() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"report":{"amount_style":"capped"}}"#).expect("write config");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("category Bills\ndeposit Bills 25 rent\nshow Bills\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("rent                     25.00\n"));
}

#[test]
fn failing_line_exits_with_error() {
    let dir = tempdir().expect("tempdir");

    cli()
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .write_stdin("category Food\nchart\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: line 2: No withdrawals recorded",
        ));
}
