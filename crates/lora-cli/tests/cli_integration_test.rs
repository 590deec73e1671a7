//! Integration tests for the converter command and binaries.

use lora_cli::commands::convert;
use lora_codegen::keygen::decode_lora_key;
use lora_core::GeneratorConfig;
use lora_core::cli::ExitCode;
use rand::rngs::OsRng;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;

const DOOR_AND_TEMP: &str = r#"[{"key":"K","iv":"I","features":{"1":{"name":"Door","values":{"0":"Off","1":"Present","2":"Confirmed"}},"2":{"name":"Temp"}}}]"#;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn execute(input: &Path, config: GeneratorConfig) -> (ExitCode, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = convert::execute(input, config, &mut OsRng, &mut out, &mut err).unwrap();
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn lora_key_line(diagnostics: &str) -> &str {
    diagnostics
        .lines()
        .find(|line| line.starts_with("#define LORA_ENCRYPT_KEY "))
        .unwrap()
}

#[test]
fn test_convert_writes_code_and_diagnostics() {
    let file = write_config(DOOR_AND_TEMP);
    let (code, out, err) = execute(file.path(), GeneratorConfig::string_mapping());

    assert_eq!(code, ExitCode::SUCCESS);
    assert!(out.starts_with("/* THIS FILE WAS AUTO-GENERATED WITH config-converter.py */\n"));
    assert!(out.contains("    case 1: return F(\"Door\");\n"));
    assert!(out.contains("    case 2: return F(\"Temp\");\n"));
    assert!(!out.contains("HC_APPLIANCE_KEY"));

    assert!(err.starts_with("Use these lines in your sender/config.h file:\n"));
    assert!(err.contains("#define HC_APPLIANCE_KEY \"K\"\n"));
    assert!(err.contains("#define HC_APPLIANCE_IV \"I\"\n"));
    assert!(err.contains("New random key for your sender/config.h and receiver/config.h file:\n"));
}

#[test]
fn test_rotated_keys_differ_between_runs() {
    let file = write_config(DOOR_AND_TEMP);
    let (_, first_out, first_err) = execute(file.path(), GeneratorConfig::string_mapping());
    let (_, second_out, second_err) = execute(file.path(), GeneratorConfig::string_mapping());

    assert_eq!(first_out, second_out);

    let first_key = lora_key_line(&first_err);
    let second_key = lora_key_line(&second_err);
    assert_ne!(first_key, second_key);

    for line in [first_key, second_key] {
        let encoded = line
            .trim_start_matches("#define LORA_ENCRYPT_KEY \"")
            .trim_end_matches('"');
        assert_eq!(decode_lora_key(encoded).unwrap().len(), 32);
    }
}

#[test]
fn test_json_variant_does_not_rotate_key() {
    let file = write_config(DOOR_AND_TEMP);
    let (code, out, err) = execute(file.path(), GeneratorConfig::json_mapping());

    assert_eq!(code, ExitCode::SUCCESS);
    assert!(out.contains("void mapIntValue(uint16_t key, int32_t value, JsonObject json) {\n"));
    assert!(!err.contains("LORA_ENCRYPT_KEY"));
}

#[test]
fn test_multiple_appliances_produce_no_code() {
    let file = write_config(
        r#"[{"key": "A", "iv": "I", "features": {}}, {"key": "B", "iv": "I", "features": {}}]"#,
    );
    let (code, out, err) = execute(file.path(), GeneratorConfig::string_mapping());

    assert_eq!(code, ExitCode::INVALID_INPUT);
    assert!(out.is_empty());
    assert_eq!(err, "Only one appliance is supported at the moment\n");
}

#[test]
fn test_missing_iv_produces_no_code() {
    let file = write_config(r#"[{"key": "K", "features": {"1": {"name": "Door"}}}]"#);
    let (code, out, err) = execute(file.path(), GeneratorConfig::string_mapping());

    assert_eq!(code, ExitCode::INVALID_INPUT);
    assert!(out.is_empty());
    assert_eq!(err, "Only appliances using port 80 are supported at the moment\n");
}

#[test]
fn test_malformed_json_produces_no_code() {
    let file = write_config("[{\"key\": ");
    let (code, out, err) = execute(file.path(), GeneratorConfig::string_mapping());

    assert_eq!(code, ExitCode::ERROR);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: "));
}

#[test]
fn test_non_numeric_key_produces_no_code() {
    let file = write_config(r#"[{"key": "K", "iv": "I", "features": {"door": {"name": "Door"}}}]"#);
    let (code, out, err) = execute(file.path(), GeneratorConfig::string_mapping());

    assert_eq!(code, ExitCode::INVALID_INPUT);
    assert!(out.is_empty());
    assert!(err.contains("'door'"));
    assert!(!err.contains("HC_APPLIANCE_KEY"));
}

#[test]
fn test_missing_file_produces_no_code() {
    let dir = tempfile::TempDir::new().unwrap();
    let (code, out, err) = execute(
        &dir.path().join("nope.json"),
        GeneratorConfig::string_mapping(),
    );

    assert_eq!(code, ExitCode::ERROR);
    assert!(out.is_empty());
    assert!(err.contains("nope.json"));
}

#[test]
fn test_binary_separates_streams() {
    let file = write_config(DOOR_AND_TEMP);
    let output = Command::new(env!("CARGO_BIN_EXE_config-converter"))
        .arg(file.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.contains("String mapIntValue(uint16_t key, int32_t value) {"));
    assert!(stderr.contains("#define LORA_ENCRYPT_KEY \""));
}

#[test]
fn test_json_binary_reports_validation_failure() {
    let file = write_config(r#"[{"key": "K", "features": {}}]"#);
    let output = Command::new(env!("CARGO_BIN_EXE_config-converter-json"))
        .arg(file.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Only appliances using port 80 are supported at the moment"));
}

#[test]
fn test_binary_without_arguments_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_config-converter"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
