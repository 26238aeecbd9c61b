use anyhow::Result;

use crate::{CliTest, run};

const SCHEMA: &str = r#"{"server": {"port": 8080, "host": "localhost"}, "debug": true}"#;

#[test]
fn test_defined_keys_pass() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"
const port = config.GetString("server.port");
const debug = viper.GetBool("debug");
"#,
    )?;
    test.write_file("config.json.template", SCHEMA)?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_undefined_key_fails() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"const host = config.GetString("server.hostname");"#,
    )?;
    test.write_file("config.json.template", SCHEMA)?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, 1, "stdout: {stdout}");
    assert!(stdout.contains("config key \"server.hostname\" is not defined in config"));
    assert!(stdout.contains("src/app.ts:1:"));
    assert!(stdout.contains("undefined-key"));
    assert!(stdout.contains("1 error"));

    Ok(())
}

#[test]
fn test_non_literal_key_warns_without_failing() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const v = viper.GetBool(someVar);\n")?;
    test.write_file("config.json.template", SCHEMA)?;

    let (code, stdout, _) = run(&mut test.check_command());
    // Warnings alone do not fail the run
    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("config key should be a string literal for static analysis"));
    assert!(stdout.contains("non-literal-key"));
    assert!(stdout.contains("1 warning"));

    Ok(())
}

#[test]
fn test_missing_schema_reports_all_keys() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"config.GetString("server.port");"#,
    )?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, 1, "stdout: {stdout}");
    assert!(stdout.contains("config key \"server.port\" is not defined in config"));

    Ok(())
}

#[test]
fn test_unrecognized_alias_is_ignored() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"logger.GetString("x");"#)?;
    test.write_file("config.json.template", SCHEMA)?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_parse_error_fails() -> Result<()> {
    let test = CliTest::with_file("src/bad.ts", "const = ;;;(")?;
    test.write_file("config.json.template", SCHEMA)?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, 1, "stdout: {stdout}");
    assert!(stdout.contains("parse-error"));

    Ok(())
}

#[test]
fn test_config_file_schema_path_override() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"config.GetString("server.port");"#,
    )?;
    test.write_file("conf/schema.json", SCHEMA)?;
    test.write_file(
        ".configlintrc.json",
        r#"{"schemaPath": "conf/schema.json"}"#,
    )?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, 0, "stdout: {stdout}");

    Ok(())
}

#[test]
fn test_schema_flag_override() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"config.GetString("server.port");"#,
    )?;
    test.write_file("other.json", SCHEMA)?;

    let mut cmd = test.check_command();
    cmd.args(["--schema", "other.json"]);
    let (code, _, _) = run(&mut cmd);
    assert_eq!(code, 0);

    Ok(())
}

#[test]
fn test_ignored_directory_is_skipped() -> Result<()> {
    let test = CliTest::with_file(
        "vendor/dep.ts",
        r#"config.GetString("not.defined.anywhere");"#,
    )?;
    test.write_file("config.json.template", SCHEMA)?;
    test.write_file(".configlintrc.json", r#"{"ignores": ["vendor"]}"#)?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, 0, "stdout: {stdout}");

    Ok(())
}

#[test]
fn test_mixed_issues_sorted_by_location() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"
config.GetString("server.port");
config.GetString("server.missing");
config.GetBool(flag);
"#,
    )?;
    test.write_file("config.json.template", SCHEMA)?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, 1, "stdout: {stdout}");
    let undefined_pos = stdout.find("server.missing").unwrap();
    let non_literal_pos = stdout.find("should be a string literal").unwrap();
    assert!(undefined_pos < non_literal_pos);
    assert!(stdout.contains("2 problems (1 error, 1 warning)"));

    Ok(())
}
