use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::channel::Messenger;
use crate::commands::utils::build_messenger;
use crate::config::Config;

/// Line rendering of an empty (not implemented) reply
const NO_REPLY: &str = "null";

/// Serve method calls on stdin/stdout until EOF
pub fn run_serve(config: &Config) -> Result<()> {
    let messenger = build_messenger(config);

    tracing::info!("Serving channel '{}' on stdio", config.channel.name);

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let handled = runtime.block_on(async {
        serve_lines(
            &messenger,
            &config.channel.name,
            tokio::io::stdin(),
            tokio::io::stdout(),
        )
        .await
    })?;

    tracing::info!("Input closed after {} requests", handled);

    Ok(())
}

/// Answer one JSON method call per input line with one reply line
///
/// Lines are read as raw bytes so a line that is not UTF-8 gets a
/// `bad_call` reply instead of ending the loop. Blank lines are skipped.
/// Returns the number of requests answered.
pub async fn serve_lines<R, W>(
    messenger: &Messenger,
    channel: &str,
    reader: R,
    mut writer: W,
) -> Result<usize>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut handled = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read request")?;
        if read == 0 {
            break;
        }

        let line = trim_line_ending(&buf);
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let reply = reply_line(messenger, channel, line);
        writer
            .write_all(reply.as_bytes())
            .await
            .context("Failed to write reply")?;
        writer.write_all(b"\n").await.context("Failed to write reply")?;
        writer.flush().await.context("Failed to flush reply")?;

        handled += 1;
    }

    Ok(handled)
}

/// Strip a trailing `\n` or `\r\n`
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Reply envelope for one request line
fn reply_line(messenger: &Messenger, channel: &str, request: &[u8]) -> String {
    match messenger.send(channel, request) {
        Some(reply) if !reply.is_empty() => String::from_utf8_lossy(&reply).into_owned(),
        _ => NO_REPLY.to_string(),
    }
}
