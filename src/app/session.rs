use crate::config::AppConfig;
use crate::core::dispatch;
use crate::domain::ports::{CommandExecutor, CommandResult};
use crate::utils::error::{AppError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub executed: usize,
    pub rejected: usize,
}

/// Parses `line` and hands the resulting command to `executor`.
///
/// A line that fails to parse never reaches the executor.
pub fn run_line<E: CommandExecutor>(line: &str, executor: &mut E) -> Result<CommandResult> {
    let command = dispatch(line)?;
    executor.execute(command)
}

/// Reads command lines until `exit` or end of input, writing one response per line.
///
/// Blank lines are skipped without a response. Rejected lines print the
/// error message and the session carries on; only I/O failures end it early.
pub async fn run_session<R, W, E>(
    reader: R,
    writer: &mut W,
    executor: &mut E,
    config: &AppConfig,
) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: CommandExecutor,
{
    let mut summary = SessionSummary::default();
    let mut lines = reader.lines();

    if let Some(banner) = &config.session.banner {
        writer.write_all(format!("{}\n", banner).as_bytes()).await?;
    }

    loop {
        writer.write_all(config.prompt().as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match run_line(&line, executor) {
            Ok(result) => {
                summary.executed += 1;
                writer
                    .write_all(format!("{}\n", result.feedback).as_bytes())
                    .await?;
                if result.exit {
                    break;
                }
            }
            Err(AppError::Parse(e)) => {
                summary.rejected += 1;
                tracing::debug!("Rejected input {:?}: {:?}", line, e.kind());
                writer.write_all(format!("{}\n", e).as_bytes()).await?;
            }
            Err(e) => {
                summary.rejected += 1;
                tracing::error!("Command failed: {} (Category: {:?})", e, e.category());
                writer
                    .write_all(format!("{}\n", e.user_friendly_message()).as_bytes())
                    .await?;
            }
        }
    }

    writer.flush().await?;
    tracing::info!(
        "Session ended: {} command(s) executed, {} rejected",
        summary.executed,
        summary.rejected
    );
    Ok(summary)
}
