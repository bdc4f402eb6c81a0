use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn run_sentra(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "-p", "sentra-cli", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_analyze_vulnerable_code_json() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("handler.js");

    let content = r#"
const user = req.query.user;
const query = "SELECT * FROM users WHERE name = '" + user + "'";
db.run(query);
res.send("<div>" + user + "</div>");
"#;
    fs::write(&input_path, content).unwrap();

    let output = run_sentra(&[
        "analyze",
        input_path.to_str().unwrap(),
        "--kind",
        "code",
        "--language",
        "javascript",
        "--json",
    ]);

    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("JSON report");

    assert_eq!(report["engineDecision"], "COMPLETED");
    assert!(report["findings"].as_array().unwrap().len() >= 2);
    assert!(report["riskScore"].as_f64().unwrap() > 0.0);
    assert_eq!(report["ai"]["enabled"], false);
}

#[test]
fn test_analyze_malformed_config_halts() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("broken.json");
    fs::write(&input_path, "{ invalid").unwrap();

    let output = run_sentra(&[
        "analyze",
        input_path.to_str().unwrap(),
        "--kind",
        "config",
        "--json",
    ]);

    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("JSON report");

    assert_eq!(report["engineDecision"], "HALTED_AT_SYNTAX_STAGE");
    assert!(report["findings"].as_array().unwrap().is_empty());
    assert_eq!(report["riskScore"], 0.0);
}

#[test]
fn test_detectors_listing() {
    let output = run_sentra(&["detectors", "--json"]);

    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let list: serde_json::Value = serde_json::from_str(&stdout).expect("JSON list");
    let detectors = list.as_array().unwrap();

    assert_eq!(detectors.len(), 7);
    assert!(detectors
        .iter()
        .any(|d| d["id"] == "sql-injection"));
    assert!(detectors.iter().any(|d| d["id"] == "xss"));
}

#[test]
fn test_invalid_kind_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("x.js");
    fs::write(&input_path, "console.log(1)").unwrap();

    let output = run_sentra(&[
        "analyze",
        input_path.to_str().unwrap(),
        "--kind",
        "binary",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid kind"));
}
