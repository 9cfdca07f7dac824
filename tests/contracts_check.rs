mod common;

use common::{spawn_health_stub, TestEnv};
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
    fs::write(
        env.project.join(".env.example"),
        "DATABASE_URL=postgres://localhost/app\n",
    )
    .unwrap();
    let base = spawn_health_stub();

    let check = env.run_json(&["check"]);
    assert_eq!(check["ok"], true);
    validate("check.schema.json", &check["data"]);

    let status = env.run_json(&["--base-url", &base, "status"]);
    assert_eq!(status["ok"], true);
    validate("status.schema.json", &status["data"]);

    let up = env.run_json(&["--base-url", &base, "up", "--timeout-secs", "10"]);
    assert_eq!(up["ok"], true);
    validate("up.schema.json", &up["data"]);
}
