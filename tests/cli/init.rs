use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, _) = run(&mut cmd);

    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(test.root().join(".configlintrc.json").exists());

    let content = test.read_file(".configlintrc.json")?;
    assert!(content.contains("\"schemaPath\": \"config.json.template\""));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".configlintrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, stderr) = run(&mut cmd);

    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"));

    Ok(())
}
