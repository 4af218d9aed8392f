use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn wordcase() -> Command {
    let mut cmd = Command::cargo_bin("wordcase").unwrap();
    // keep the user's global config out of the way
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/wordcase-tests")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_converts_argument_phrases() {
    wordcase()
        .args(["camel-snake", "camel snake kebab", "XMLHttpRequest"])
        .assert()
        .success()
        .stdout("Camel_Snake_Kebab\nXml_Http_Request\n");
}

#[test]
fn test_hyphenated_phrases_after_separator() {
    wordcase()
        .args(["kebab", "--", "-camel-snake-kebab----", "__camel"])
        .assert()
        .success()
        .stdout("-camel-snake-kebab----\ncamel\n");
}

#[test]
fn test_reads_phrases_from_stdin() {
    wordcase()
        .arg("screaming-kebab")
        .write_stdin("camelSnakeKebab\n\n   \nx_camel\n")
        .assert()
        .success()
        .stdout("CAMEL-SNAKE-KEBAB\nX-CAMEL\n");
}

#[test]
fn test_keep_blank_lines() {
    wordcase()
        .args(["title", "--keep-blank"])
        .write_stdin("one\n\ntwo\n")
        .assert()
        .success()
        .stdout("One\n\nTwo\n");
}

#[test]
fn test_unknown_style_fails() {
    wordcase()
        .args(["shouting", "phrase"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("unknown style `shouting`"));
}

#[test]
fn test_missing_style_fails() {
    wordcase().assert().failure();
}

#[test]
fn test_list_styles() {
    wordcase()
        .args(["--list", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("camel-kebab"))
        .stdout(predicate::str::contains("\"Camel-Snake-Kebab\""));
}

#[test]
fn test_json_output() {
    let output = wordcase()
        .args(["-o", "json", "pascal", "camel_snake"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["style"], "pascal");
    assert_eq!(value["conversions"][0]["input"], "camel_snake");
    assert_eq!(value["conversions"][0]["output"], "CamelSnake");
}

#[test]
fn test_local_config_alias() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".wordcase.toml"),
        "[aliases]\nconst = \"screaming-snake\"\n",
    )
    .unwrap();

    wordcase()
        .current_dir(dir.path())
        .args(["const", "maxRetryCount"])
        .assert()
        .success()
        .stdout("MAX_RETRY_COUNT\n");
}

#[test]
fn test_explicit_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordcase.toml");
    fs::write(&path, "format = \"json\"\n").unwrap();

    wordcase()
        .arg("--config")
        .arg(&path)
        .args(["lower", "CamelCase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output\": \"camel case\""));
}

#[test]
fn test_broken_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "format = [").unwrap();

    wordcase()
        .arg("--config")
        .arg(&path)
        .args(["lower", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_local_config_restores_global_overrides() {
    let config_home = tempfile::tempdir().unwrap();
    let global_dir = config_home.path().join("wordcase");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("config.toml"),
        "format = \"json\"\nskip_blank_lines = false\n",
    )
    .unwrap();

    let project = tempfile::tempdir().unwrap();
    fs::write(
        project.path().join(".wordcase.toml"),
        "format = \"text\"\nskip_blank_lines = true\n",
    )
    .unwrap();

    wordcase()
        .env("XDG_CONFIG_HOME", config_home.path())
        .current_dir(project.path())
        .arg("snake")
        .write_stdin("camelCase\n\nkebab-case\n")
        .assert()
        .success()
        .stdout("camel_case\nkebab_case\n");
}
