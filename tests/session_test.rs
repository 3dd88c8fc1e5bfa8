use anyhow::Result;
use applicant_ledger::{
    run_session, AppConfig, Command, CommandExecutor, CommandResult, EchoExecutor, OutputFormat,
};

/// 記錄收到的指令，驗證解析失敗的輸入不會送達執行器
#[derive(Default)]
struct RecordingExecutor {
    received: Vec<Command>,
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&mut self, command: Command) -> applicant_ledger::Result<CommandResult> {
        let exit = command == Command::Exit;
        self.received.push(command);
        Ok(CommandResult {
            feedback: "ok".to_string(),
            exit,
        })
    }
}

#[tokio::test]
async fn test_rejected_lines_never_reach_executor() -> Result<()> {
    let input: &[u8] = b"foo n/Alice\n\nadd n/Alice\ndelete 2\nlist\n";
    let mut output = Vec::new();
    let mut executor = RecordingExecutor::default();

    let summary = run_session(input, &mut output, &mut executor, &AppConfig::default()).await?;

    assert_eq!(summary.executed, 2);
    assert_eq!(summary.rejected, 2);
    assert_eq!(executor.received.len(), 2);
    assert_eq!(executor.received[1], Command::List);

    let text = String::from_utf8(output)?;
    assert!(text.contains("Unknown command: foo"));
    assert!(text.contains("Missing mandatory field: phone (p/)"));
    Ok(())
}

#[tokio::test]
async fn test_banner_and_prompt_from_config() -> Result<()> {
    let config = AppConfig::from_toml_str(
        r#"
[session]
prompt = "hr> "
banner = "Applicant ledger"
"#,
    )?;
    let input: &[u8] = b"exit\n";
    let mut output = Vec::new();
    let mut executor = EchoExecutor::new(config.output_format());

    run_session(input, &mut output, &mut executor, &config).await?;

    let text = String::from_utf8(output)?;
    assert!(text.starts_with("Applicant ledger\nhr> "));
    assert!(text.ends_with("Goodbye!\n"));
    Ok(())
}

#[tokio::test]
async fn test_json_session_output() -> Result<()> {
    let config = AppConfig::from_toml_str("[output]\nformat = \"json\"\n")?;
    assert_eq!(config.output_format(), OutputFormat::Json);

    let input: &[u8] =
        b"add n/Alice p/98765432 e/alice@ex.com g/85 i/NUS c/CS y/2025-05 s/Rust\n";
    let mut output = Vec::new();
    let mut executor = EchoExecutor::new(config.output_format());

    let summary = run_session(input, &mut output, &mut executor, &config).await?;
    assert_eq!(summary.executed, 1);

    let text = String::from_utf8(output)?;
    let json_line = text
        .lines()
        .map(|line| line.trim_start_matches("> "))
        .find(|line| line.starts_with('{'))
        .ok_or_else(|| anyhow::anyhow!("no JSON line in {:?}", text))?;
    let value: serde_json::Value = serde_json::from_str(json_line)?;

    assert_eq!(value["command"], "add");
    assert_eq!(value["applicant"]["name"], "Alice");
    assert_eq!(value["applicant"]["grade"], 85);
    assert_eq!(value["applicant"]["status"], "Applied");
    assert_eq!(value["applicant"]["skills"], serde_json::json!(["Rust"]));
    Ok(())
}

#[tokio::test]
async fn test_end_of_input_ends_session() -> Result<()> {
    let input: &[u8] = b"list";
    let mut output = Vec::new();
    let mut executor = RecordingExecutor::default();

    let summary = run_session(input, &mut output, &mut executor, &AppConfig::default()).await?;
    assert_eq!(summary.executed, 1);
    Ok(())
}
