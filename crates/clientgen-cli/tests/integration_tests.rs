//! Integration tests for the clientgen binary.
//!
//! Each test lays out a small repository in a temp dir (models, metadata,
//! templates, one customization) and runs the binary inside it with the
//! default relative paths.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CLIENT_TEMPLATE: &str = "\
/*comment*/
Template for service clients.
/*comment*//**/
AWS.$className = defineService('$serviceName', ['$versionNumbers']);
/*ifcustomizations*/
require('../lib/services/$serviceName');
/*ifcustomizations*//**/
/*eachVersion*/
/*$loaderPrefix*/
  loader
/*$loaderPrefix*//**/
$loaderPrefix('$serviceName', '$version', '$api');
/*ifpaginators*/
$loaderPrefix.paginators('$paginators');
/*ifpaginators*//**/
/*ifwaiters*/
$loaderPrefix.waiters('$waiters');
/*ifwaiters*//**/
/*eachVersion*//**/
";

const LOADER_TEMPLATE: &str = "\
/*eachService*/
load('$serviceName', '$className');
/*eachService*//**/
";

const METADATA: &str = r#"{
  "acm": { "name": "ACM", "cors": true },
  "dynamodb": { "name": "DynamoDB" },
  "iotdata": { "name": "IotData", "prefix": "iot-data", "cors": true }
}"#;

const MODELS: &[&str] = &[
    "acm-2015-12-08.min.json",
    "acm-2015-12-08.paginators.json",
    "dynamodb-2011-12-05.min.json",
    "dynamodb-2012-08-10.min.json",
    "dynamodb-2012-08-10.waiters2.json",
    "iot-data-2015-05-28.min.json",
];

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(root, "apis/metadata.json", METADATA);
    for model in MODELS {
        write(root, &format!("apis/{model}"), "{}");
    }
    write(root, "dist-tools/client-template.js", CLIENT_TEMPLATE);
    write(root, "dist-tools/client-loader-template.js", LOADER_TEMPLATE);
    write(root, "lib/services/dynamodb.js", "// customizations\n");

    temp
}

/// The binary, run inside `root`, isolated from the user's config and env.
fn clientgen(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clientgen").unwrap();
    cmd.current_dir(root)
        .env("HOME", root.join("home"))
        .env("XDG_CONFIG_HOME", root.join("home/.config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

// ── help / version ───────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    clientgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clientgen"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    clientgen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_help_lists_flags() {
    let temp = TempDir::new().unwrap();
    clientgen(temp.path())
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--service"))
        .stdout(predicate::str::contains("--api-version"));
}

// ── generate ─────────────────────────────────────────────────────────────────

#[test]
fn test_generate_writes_clients_and_aggregates() {
    let temp = fixture();
    let root = temp.path();

    clientgen(root)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 3 clients (2 browser)"));

    assert_eq!(
        read(root, "clients/acm.js"),
        "AWS.ACM = defineService('acm', ['2015-12-08']);\n\
         loader('acm', '2015-12-08', 'acm-2015-12-08.min');\n\
         loader.paginators('acm-2015-12-08.paginators');\n"
    );
    assert_eq!(
        read(root, "clients/dynamodb.js"),
        "AWS.DynamoDB = defineService('dynamodb', ['2011-12-05', '2012-08-10']);\n\
         require('../lib/services/dynamodb');\n\
         loader('dynamodb', '2011-12-05', 'dynamodb-2011-12-05.min');\n\
         \n\
         loader('dynamodb', '2012-08-10', 'dynamodb-2012-08-10.min');\n\
         loader.waiters('dynamodb-2012-08-10.waiters2');\n"
    );
    assert!(read(root, "clients/iotdata.js")
        .contains("loader('iotdata', '2015-05-28', 'iot-data-2015-05-28.min');"));

    assert_eq!(
        read(root, "clients/all.js"),
        "load('acm', 'ACM');\nload('dynamodb', 'DynamoDB');\nload('iotdata', 'IotData');\n"
    );
    assert_eq!(
        read(root, "clients/browser_default.js"),
        "load('acm', 'ACM');\nload('iotdata', 'IotData');\n"
    );
}

#[test]
fn test_generate_single_service_skips_aggregates() {
    let temp = fixture();
    let root = temp.path();

    clientgen(root)
        .args(["gen", "--service", "DynamoDB", "--api-version", "2012-08-10"])
        .assert()
        .success();

    let client = read(root, "clients/dynamodb.js");
    assert!(client.contains("['2011-12-05', '2012-08-10']"));
    assert!(!client.contains("loader('dynamodb', '2011-12-05'"));
    assert!(client.contains("loader('dynamodb', '2012-08-10'"));

    assert!(!root.join("clients/all.js").exists());
    assert!(!root.join("clients/acm.js").exists());
}

#[test]
fn test_generate_json_summary() {
    let temp = fixture();

    let out = clientgen(temp.path())
        .args(["--output-format", "json", "generate"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["services"], serde_json::json!(["acm", "dynamodb", "iotdata"]));
    assert_eq!(summary["cors_services"], serde_json::json!(["acm", "iotdata"]));
    assert_eq!(summary["written"].as_array().unwrap().len(), 5);
}

#[test]
fn test_clients_dir_override() {
    let temp = fixture();
    let root = temp.path();

    clientgen(root)
        .args(["generate", "--clients-dir", "out/js"])
        .assert()
        .success();

    assert!(root.join("out/js/all.js").exists());
    assert!(!root.join("clients").exists());
}

#[test]
fn test_env_overrides_extension() {
    let temp = fixture();
    let root = temp.path();

    clientgen(root)
        .env("CLIENTGEN__OUTPUT__EXTENSION", "mjs")
        .arg("generate")
        .assert()
        .success();

    assert!(root.join("clients/acm.mjs").exists());
    assert!(root.join("clients/browser_default.mjs").exists());
}

#[test]
fn test_config_file_is_honoured() {
    let temp = fixture();
    let root = temp.path();
    write(root, "settings.toml", "[paths]\nclients_dir = \"generated\"\n");

    clientgen(root)
        .args(["--config", "settings.toml", "generate"])
        .assert()
        .success();

    assert!(root.join("generated/all.js").exists());
}

// ── list ─────────────────────────────────────────────────────────────────────

#[test]
fn test_list_table() {
    let temp = fixture();
    clientgen(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Services (3):"))
        .stdout(predicate::str::contains("2012-08-10  api, waiters"));
}

#[test]
fn test_list_json_for_one_service() {
    let temp = fixture();

    let out = clientgen(temp.path())
        .args(["list", "--service", "dynamodb", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let services = listing.as_array().unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0]["class_name"], "DynamoDB");
    assert_eq!(services[0]["cors"], false);

    let versions = services[0]["versions"].as_array().unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[1]["waiters"], "dynamodb-2012-08-10.waiters2");
    assert!(versions[0]["paginators"].is_null());
}

#[test]
fn test_list_plain_names() {
    let temp = fixture();
    clientgen(temp.path())
        .args(["ls", "--format", "list"])
        .assert()
        .success()
        .stdout("acm\ndynamodb\niotdata\n");
}

// ── config / init / completions ──────────────────────────────────────────────

#[test]
fn test_config_get_reads_env() {
    let temp = TempDir::new().unwrap();
    clientgen(temp.path())
        .env("CLIENTGEN__PATHS__APIS_DIR", "vendor/apis")
        .args(["config", "get", "paths.apis_dir"])
        .assert()
        .success()
        .stdout("vendor/apis\n");
}

#[test]
fn test_config_list_shows_sections() {
    let temp = TempDir::new().unwrap();
    clientgen(temp.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[paths]"))
        .stdout(predicate::str::contains("strict_markers = true"));
}

#[test]
fn test_init_local_then_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    clientgen(root).args(["init", "--local"]).assert().success();
    let written = read(root, "clientgen.toml");
    assert!(written.contains("[expansion]"));

    write(root, "clientgen.toml", "# edited\n");
    clientgen(root)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert_eq!(read(root, "clientgen.toml"), "# edited\n");

    clientgen(root)
        .args(["init", "--local", "--force"])
        .assert()
        .success();
    assert!(read(root, "clientgen.toml").contains("[paths]"));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    clientgen(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clientgen"));
}
