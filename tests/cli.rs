use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const GDP_CSV: &str = "\
Country,2023,2024,2025
France,100,100,110
Germany,100,100,120
Brazil,50,50,60
";

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("gdpi").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gdpi"));
}

#[test]
fn continents_and_world_from_csv() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("gdp.csv");
    fs::write(&data, GDP_CSV).unwrap();

    Command::cargo_bin("gdpi")
        .unwrap()
        .arg("--data")
        .arg(&data)
        .args(["continents", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Europe: 15.00%"))
        .stdout(predicate::str::contains("South America: 20.00%"));

    Command::cargo_bin("gdpi")
        .unwrap()
        .arg("--data")
        .arg(&data)
        .arg("world")
        .assert()
        .success()
        .stdout(predicate::str::contains("290.00 B"));
}

#[test]
fn unknown_country_prints_placeholder() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("gdp.csv");
    fs::write(&data, GDP_CSV).unwrap();

    Command::cargo_bin("gdpi")
        .unwrap()
        .arg("--data")
        .arg(&data)
        .args(["country", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Atlantis: N/A"));
}

#[test]
fn compare_saves_json() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("gdp.csv");
    let out = dir.path().join("cmp.json");
    fs::write(&data, GDP_CSV).unwrap();

    Command::cargo_bin("gdpi")
        .unwrap()
        .arg("--data")
        .arg(&data)
        .arg("--out")
        .arg(&out)
        .args(["compare", "France,Germany;Brazil"])
        .assert()
        .success()
        .stdout(predicate::str::contains("highest growth: Germany"));

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["overall_min_gdp"]["country"], "Brazil");
}
