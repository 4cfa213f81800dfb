// Headless mode - line-oriented chat on stdin/stdout
//
// Each stdin line is one submission. Messages are written to stdout as
// `user: ...` / `bot: ...` lines as they reach the log. Logs go to stderr so
// stdout stays a clean transcript. On end of input, queued replies are still
// delivered before exiting; Ctrl+C exits immediately.

use crate::chat::{reply_timer, ChatMessage, ChatSession, DisplaySink};
use crate::config::Config;
use crate::profile::ProfileFacts;
use crate::resolver::Resolver;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::Instant;

/// Writes each message as a `sender: text` line
pub struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> DisplaySink for LineSink<W> {
    fn show(&mut self, message: &ChatMessage) {
        // A closed stdout is not worth crashing the session over
        if let Err(e) = writeln!(self.out, "{}", message.to_line()).and_then(|_| self.out.flush())
        {
            tracing::warn!("Failed to write message: {}", e);
        }
    }
}

/// Decode one raw input line; invalid UTF-8 becomes U+FFFD
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let line = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = line {
        tracing::warn!("Input line was not valid UTF-8, replaced invalid bytes");
    }
    line
}

/// Run the chat against stdin until EOF or Ctrl+C
pub async fn run_headless(config: &Config, profile: Arc<ProfileFacts>) -> Result<()> {
    let resolver = Resolver::new(config.resolver.missing_experience);
    let mut session = ChatSession::new(profile, resolver, LineSink::new(std::io::stdout()))
        .with_reply_delay(config.reply_delay);

    chat_over(&mut session, BufReader::new(tokio::io::stdin())).await?;

    tracing::info!(
        "Headless session ended with {} message(s)",
        session.log().len()
    );
    Ok(())
}

/// Submit each input line, then deliver what is still queued once input ends
///
/// Lines are read as bytes so a bad line only affects itself.
async fn chat_over<S, R>(session: &mut ChatSession<S>, mut input: R) -> Result<()>
where
    S: DisplaySink,
    R: AsyncBufRead + Unpin,
{
    // Partial reads stay here if another branch wins the select
    let mut buf = Vec::new();
    let mut input_open = true;

    loop {
        if !input_open && session.next_due().is_none() {
            break;
        }

        tokio::select! {
            read = input.read_until(b'\n', &mut buf), if input_open => {
                if read.context("Failed to read input")? == 0 {
                    tracing::debug!("Input closed, draining {} pending reply(s)", session.pending().count());
                    input_open = false;
                } else {
                    session.submit(&decode_line(&buf), Instant::now());
                    buf.clear();
                }
            }
            _ = reply_timer(session.next_due()) => {
                session.deliver_due(Instant::now());
            }
            _ = tokio::signal::ctrl_c() => {
                let dropped = session.cancel_all();
                tracing::info!("Interrupted, {} reply(s) dropped", dropped);
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::SubmissionId;
    use std::time::Duration;

    #[test]
    fn line_sink_prefixes_sender() {
        let mut sink = LineSink::new(Vec::new());
        sink.show(&ChatMessage::user(SubmissionId(1), "hi"));
        sink.show(&ChatMessage::bot(SubmissionId(1), "hello"));

        let out = String::from_utf8(sink.out).unwrap();
        assert_eq!(out, "user: hi\nbot: hello\n");
    }

    #[test]
    fn decode_line_replaces_invalid_bytes() {
        assert_eq!(decode_line(b"skills\n"), "skills\n");
        assert_eq!(decode_line(b"\xff\xfe hi"), "\u{FFFD}\u{FFFD} hi");
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_utf8_line_does_not_end_the_chat() {
        let mut session = ChatSession::new(
            Arc::new(ProfileFacts::default()),
            Resolver::default(),
            LineSink::new(Vec::new()),
        );
        let input: &[u8] = b"skills\n\xff\xfe hi\ncertifications\n";

        chat_over(&mut session, input).await.unwrap();

        let out = String::from_utf8(session.sink().out.clone()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 6, "{}", out);
        assert_eq!(lines[0], "user: skills");
        assert_eq!(lines[1], "user: \u{FFFD}\u{FFFD} hi");
        assert_eq!(lines[2], "user: certifications");
        assert!(lines[3].starts_with("bot: My key skills include: "));
        assert!(lines[4].starts_with("bot: I can help you"));
        assert!(lines[5].starts_with("bot: My certifications: "));
    }

    #[tokio::test(start_paused = true)]
    async fn session_writes_reply_after_delay() {
        let mut session = ChatSession::new(
            Arc::new(ProfileFacts::default()),
            Resolver::default(),
            LineSink::new(Vec::new()),
        );

        session.submit("  certifications  ", Instant::now());
        reply_timer(session.next_due()).await;
        session.deliver_due(Instant::now());

        let out = String::from_utf8(session.sink().out.clone()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "user: certifications");
        assert!(lines[1].starts_with("bot: My certifications: "));
        assert_eq!(session.reply_delay(), Duration::from_millis(500));
    }
}
