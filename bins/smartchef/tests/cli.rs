//! End-to-end tests for the smartchef binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"[
    {"id": "1", "title": "Bruschetta", "image": "bruschetta.jpg",
     "ingredients": [{"name": "Tomato", "amount": "2"}, {"name": "Basil", "amount": "6 leaves"}, {"name": "Olive Oil", "amount": "1 tbsp"}],
     "steps": "Chop\nToast\nAssemble"},
    {"id": "2", "title": "Caprese", "image": "caprese.jpg",
     "ingredients": [{"name": "Cherry Tomatoes", "amount": "200 g"}, {"name": "Mozzarella", "amount": "125 g"}, {"name": "Basil", "amount": "1 handful"}],
     "cookingTime": 10, "servings": 2, "steps": ["Slice", "Layer"]},
    {"id": "3", "title": "Pancakes",
     "ingredients": [{"name": "Egg", "amount": "2"}, {"name": "Milk", "amount": "300 ml"}, {"name": "Flour", "amount": "100 g"}],
     "steps": []}
]"#;

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn smartchef(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("smartchef").unwrap();
    cmd.env_remove("RUST_LOG").arg("--config").arg(config.path());
    cmd
}

#[test]
fn check_accepts_and_normalizes() {
    let config = temp_file("");
    smartchef(&config)
        .args(["check", "  Tomato ", "olive oil"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tomato").and(predicate::str::contains("olive oil")));
}

#[test]
fn check_rejects_with_validation_exit_code() {
    let config = temp_file("");
    smartchef(&config)
        .args(["check", "ab", "tomato3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least 3 characters"))
        .stderr(predicate::str::contains("letters and spaces"));
}

#[test]
fn check_json_output() {
    let config = temp_file("");
    let output = smartchef(&config)
        .args(["--format", "json", "check", "Basil"])
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["normalized"], "basil");
}

#[test]
fn json_format_reports_errors_as_json() {
    let config = temp_file("");
    let output = smartchef(&config)
        .args(["--format", "json", "search", "--catalog", "/no/such/recipes.json", "-i", "egg"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    let report: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(report["code_str"], "E4001");
    assert_eq!(report["category"], "Catalog");
    assert!(report["suggestion"].as_str().unwrap().contains("--catalog"));
}

#[test]
fn json_format_reports_config_errors_as_json() {
    let config = temp_file("[limits]\nmax_results = 0\n");
    let output = smartchef(&config)
        .args(["--format", "json", "check", "egg"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let report: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(report["code"], "CONFIG_VALIDATION_ERROR");
}

#[test]
fn search_ranks_recipes_as_json() {
    let config = temp_file("");
    let catalog = temp_file(CATALOG);
    let output = smartchef(&config)
        .args(["--format", "json", "search", "--catalog"])
        .arg(catalog.path())
        .args(["-i", "tomato", "-i", "basil", "-i", "mozzarella"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], "2");
    assert_eq!(results[0]["score"], 3);
    assert_eq!(results[1]["id"], "1");
    assert_eq!(results[1]["usedIngredients"], serde_json::json!(["tomato", "basil"]));
    assert_eq!(results[1]["steps"][2], "Assemble");
}

#[test]
fn search_text_output() {
    let config = temp_file("");
    let catalog = temp_file(CATALOG);
    smartchef(&config)
        .args(["search", "--catalog"])
        .arg(catalog.path())
        .args(["-i", "Egg", "-i", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Pancakes [3]"))
        .stdout(predicate::str::contains("uses: egg, milk"));
}

#[test]
fn search_skips_invalid_ingredients() {
    let config = temp_file("");
    let catalog = temp_file(CATALOG);
    smartchef(&config)
        .args(["search", "--catalog"])
        .arg(catalog.path())
        .args(["-i", "egg", "-i", "m1lk", "-i", "flour"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping \"m1lk\""))
        .stdout(predicate::str::contains("Pancakes"));
}

#[test]
fn search_uses_catalog_from_config() {
    let catalog = temp_file(CATALOG);
    let config = temp_file(&format!(
        "[catalog]\npath = {:?}\n\n[limits]\nmin_match = 1\nmax_results = 1\n",
        catalog.path().display().to_string()
    ));

    let output = smartchef(&config)
        .args(["--format", "json", "search", "-i", "flour"])
        .output()
        .unwrap();

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["id"], "3");
}

#[test]
fn search_missing_catalog_exit_code() {
    let config = temp_file("");
    smartchef(&config)
        .args(["search", "--catalog", "/no/such/recipes.json", "-i", "egg"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Recipe catalog not found"));
}

#[test]
fn invalid_config_exit_code() {
    let config = temp_file("[limits]\nmax_results = 0\n");
    smartchef(&config)
        .args(["check", "egg"])
        .assert()
        .code(3);
}

#[test]
fn repl_session() {
    let config = temp_file("");
    let catalog = temp_file(CATALOG);
    smartchef(&config)
        .args(["repl", "--catalog"])
        .arg(catalog.path())
        .write_stdin("add egg\nadd flour\nsearch\nclear\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 recipes loaded"))
        .stdout(predicate::str::contains("Pancakes"))
        .stdout(predicate::str::contains("No ingredients yet"));
}
