use applicant_ledger::utils::error::{AppError, ErrorSeverity};
use applicant_ledger::utils::logger;
use applicant_ledger::{run_line, run_session, CliConfig, EchoExecutor};
use clap::Parser;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.load_app_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }
    tracing::debug!("Effective configuration: {:?}", config);

    let mut executor = EchoExecutor::new(config.output_format());

    // 單次模式：解析一行指令後結束
    if let Some(line) = &cli.command {
        match run_line(line, &mut executor) {
            Ok(result) => {
                println!("{}", result.feedback);
                return Ok(());
            }
            Err(e) => {
                tracing::debug!("One-shot command rejected (Severity: {:?})", e.severity());
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                std::process::exit(exit_code(&e));
            }
        }
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let summary = run_session(stdin, &mut stdout, &mut executor, &config).await?;
    tracing::debug!("Final summary: {:?}", summary);

    Ok(())
}

fn exit_code(error: &AppError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 1,      // 輸入被拒絕
        ErrorSeverity::Medium => 2,   // 輸出失敗
        ErrorSeverity::High => 3,     // 設定錯誤
        ErrorSeverity::Critical => 4, // 系統錯誤
    }
}
