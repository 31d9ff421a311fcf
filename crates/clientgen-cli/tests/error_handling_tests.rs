//! Tests for error handling, exit codes and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TEMPLATE: &str = "client $serviceName\n";
const LOADER: &str = "/*eachService*/\n$serviceName\n/*eachService*//**/\n";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A repository with two services, `foo` and `bar`.
fn fixture(models: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(
        root,
        "apis/metadata.json",
        r#"{"foo": {"name": "Foo", "cors": true}, "bar": {"name": "Bar"}}"#,
    );
    for model in models {
        write(root, &format!("apis/{model}"), "{}");
    }
    write(root, "dist-tools/client-template.js", TEMPLATE);
    write(root, "dist-tools/client-loader-template.js", LOADER);
    temp
}

fn clientgen(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clientgen").unwrap();
    cmd.current_dir(root)
        .env("HOME", root.join("home"))
        .env("XDG_CONFIG_HOME", root.join("home/.config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_error_unknown_service() {
    let temp = fixture(&["foo-2015-01-01.min.json", "bar-2015-01-01.min.json"]);

    clientgen(temp.path())
        .args(["generate", "--service", "baz"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("baz"))
        .stderr(predicate::str::contains("clientgen list"));
}

#[test]
fn test_error_missing_core_file_aborts_run() {
    // Services run in key order, so `bar` is written before `foo` fails.
    let temp = fixture(&["bar-2015-01-01.min.json", "foo-2015-01-01.paginators.json"]);
    let root = temp.path();

    clientgen(root)
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No API model for foo-2015-01-01"))
        .stderr(predicate::str::contains("foo-2015-01-01.min.json"));

    assert!(root.join("clients/bar.js").exists());
    assert!(!root.join("clients/foo.js").exists());
    assert!(!root.join("clients/all.js").exists());
}

#[test]
fn test_error_service_without_models() {
    let temp = fixture(&["foo-2015-01-01.min.json"]);

    clientgen(temp.path())
        .args(["generate", "--service", "Bar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to get models for bar"));
}

#[test]
fn test_error_unknown_api_version() {
    let temp = fixture(&["foo-2015-01-01.min.json"]);

    clientgen(temp.path())
        .args(["generate", "--service", "foo", "--api-version", "2020-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2020-01-01"));
}

#[test]
fn test_error_missing_models_dir_is_configuration() {
    let temp = fixture(&["foo-2015-01-01.min.json"]);

    clientgen(temp.path())
        .env("CLIENTGEN__PATHS__APIS_DIR", "no-such-dir")
        .arg("generate")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("no-such-dir"));
}

#[test]
fn test_error_missing_template_is_configuration() {
    let temp = fixture(&["foo-2015-01-01.min.json", "bar-2015-01-01.min.json"]);
    fs::remove_file(temp.path().join("dist-tools/client-template.js")).unwrap();

    clientgen(temp.path())
        .arg("generate")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("client-template.js"));
}

#[test]
fn test_error_unterminated_block() {
    let temp = fixture(&["foo-2015-01-01.min.json", "bar-2015-01-01.min.json"]);
    write(
        temp.path(),
        "dist-tools/client-template.js",
        "/*ifcustomizations*/\nnever closed\n",
    );

    clientgen(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("/*ifcustomizations*/"));

    // Lenient expansion leaves the marker in place instead.
    clientgen(temp.path())
        .env("CLIENTGEN__EXPANSION__STRICT_MARKERS", "false")
        .arg("generate")
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(temp.path().join("clients/foo.js")).unwrap(),
        "/*ifcustomizations*/\nnever closed\n"
    );
}

#[test]
fn test_error_missing_explicit_config() {
    let temp = TempDir::new().unwrap();

    clientgen(temp.path())
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    clientgen(temp.path())
        .args(["config", "get", "paths.nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_api_version_requires_service() {
    let temp = TempDir::new().unwrap();

    clientgen(temp.path())
        .args(["generate", "--api-version", "2015-01-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--service"));
}

#[test]
fn test_verbose_shows_cause_chain() {
    let temp = TempDir::new().unwrap();

    clientgen(temp.path())
        .args(["-v", "--config", "absent.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
