mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let list = env.run_json(&["list"]);
    assert_eq!(list["ok"], true);
    validate("list.schema.json", &list["data"]);

    let includes = env.run_json(&["includes", "--kind", "header"]);
    assert_eq!(includes["ok"], true);
    validate("includes.schema.json", &includes["data"]);

    let build = env.run_json(&["build"]);
    assert_eq!(build["ok"], true);
    validate("build.schema.json", &build["data"]);
    for output in build["data"]["outputs"].as_array().unwrap() {
        validate("output-report.schema.json", output);
    }

    let check = env.run_json(&["check"]);
    assert_eq!(check["ok"], true);
    validate("check.schema.json", &check["data"]);
    for output in check["data"]["outputs"].as_array().unwrap() {
        validate("output-report.schema.json", output);
    }

    fs::remove_file(env.path("src/zlib.h")).unwrap();
    let err = env.run_json_failure(&["build"]);
    validate("error.schema.json", &err);
}
