use std::{
    io::Write,
    process::{
        Command,
        Output,
        Stdio,
    },
};

fn apiframe(args: &[&str], stdin: &str) -> eyre::Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_apiframe"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child.stdin.take().ok_or_else(|| eyre::eyre!("no stdin"))?.write_all(stdin.as_bytes())?;

    Ok(child.wait_with_output()?)
}

#[test]
fn encode_tx64() -> eyre::Result<()> {
    let output = apiframe(
        &["encode", "tx64", "--frame-id", "1", "--dest", "0001020304050607"],
        "",
    )?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("TX (Transmit) Request 64-bit address (0x00)"));
    assert_eq!(lines.next(), Some("payload: 01000102030405060700"));
    assert_eq!(lines.next(), Some("\tFrame ID: 01 (1)"));

    Ok(())
}

#[test]
fn encode_rejects_frame_id() -> eyre::Result<()> {
    let output = apiframe(&["encode", "tx16", "--frame-id", "256", "--dest", "FFFF"], "")?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("frame id must be between 0 and 255"));

    Ok(())
}

#[test]
fn decode_stdin_json() -> eyre::Result<()> {
    let output = apiframe(&["decode", "--type", "0x01", "--json"], "01 FF FF 00\n")?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "{\"frame_type\":\"Tx16\",\"tag\":\"01\",\"payload\":\"01FFFF00\",\"parameters\":\
         {\"Frame ID\":\"01 (1)\",\"16-bit dest. address\":\"FF FF\",\"Options\":\"00\"}}\n"
    );

    Ok(())
}

#[test]
fn decode_truncated() -> eyre::Result<()> {
    let output = apiframe(&["decode", "--type", "0", "0102"], "")?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("payload truncated"));

    Ok(())
}
