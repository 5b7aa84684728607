use glossa_types::AppEvent;
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Stdin watcher: every non-blank line is a lookup submission.
pub async fn watcher_io(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("input watcher stopping");
                return Ok(());
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        event_tx.send(AppEvent::SubmitQuery(line)).await?;
                    }
                    None => {
                        tracing::info!("stdin closed");
                        return Ok(());
                    }
                }
            }
        }
    }
}
