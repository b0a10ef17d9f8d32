//! Interactive read-eval-print loop

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::error::ChatResult;
use super::session::ChatSession;

/// Written before every read
pub const PROMPT: &str = "\nAsk: ";

/// Ends the loop, compared ignoring ASCII case
pub const QUIT_COMMAND: &str = "quit";

/// The line as typed, without its line terminator
fn strip_newline(line: &str) -> &str {
    line.trim_end_matches(&['\r', '\n'][..])
}

/// Whether a line read from the user ends the session
///
/// Only the line terminator is ignored; ` quit ` is an ordinary query.
pub fn is_quit(line: &str) -> bool {
    strip_newline(line).eq_ignore_ascii_case(QUIT_COMMAND)
}

/// Format one answer for display
pub fn format_response(text: &str) -> String {
    format!("\nResponse:\n {}\n", text)
}

/// Read queries until `quit` or end of input
///
/// Each line other than `quit` runs exactly one query cycle. The first
/// error stops the loop and is returned; closing the session is left to
/// the caller.
pub async fn run<R, W>(session: &mut ChatSession, mut input: R, mut output: W) -> ChatResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            break;
        }
        if is_quit(&line) {
            break;
        }

        let query = strip_newline(&line);
        let response = session.process_query(query).await?;
        output.write_all(format_response(&response).as_bytes()).await?;
        output.flush().await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::mcp::MockToolSource;
    use crate::providers::{MockProvider, ProviderModelConfig};
    use std::sync::Arc;

    fn session(provider: &MockProvider) -> ChatSession {
        ChatSession::new(
            Box::new(provider.clone()),
            Box::new(MockToolSource::new()),
            ProviderModelConfig::new("test-model"),
            Arc::new(NoOpLogger),
        )
    }

    #[test]
    fn test_is_quit() {
        assert!(is_quit("quit\n"));
        assert!(is_quit("QuIt\r\n"));
        assert!(is_quit("QUIT"));
        assert!(!is_quit("  QuIt \r\n"));
        assert!(!is_quit("quit now"));
        assert!(!is_quit(""));
    }

    #[tokio::test]
    async fn test_one_cycle_per_line() {
        let provider = MockProvider::echo(Arc::new(NoOpLogger));
        let mut session = session(&provider);

        let input: &[u8] = b"first\nsecond\nquit\n";
        let mut output = Vec::new();
        run(&mut session, input, &mut output).await.unwrap();

        assert_eq!(provider.request_count(), 2);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "\nAsk: \nResponse:\n Echo: first\n\nAsk: \nResponse:\n Echo: second\n\nAsk: "
        );
    }

    #[tokio::test]
    async fn test_padded_quit_is_a_query() {
        let provider = MockProvider::echo(Arc::new(NoOpLogger));
        let mut session = session(&provider);

        let input: &[u8] = b" quit \nquit\n";
        let mut output = Vec::new();
        run(&mut session, input, &mut output).await.unwrap();

        assert_eq!(provider.request_count(), 1);
        let requests = provider.requests();
        assert_eq!(requests[0].messages[0].text(), Some(" quit "));
    }

    #[tokio::test]
    async fn test_end_of_input_stops() {
        let provider = MockProvider::fixed("ok", Arc::new(NoOpLogger));
        let mut session = session(&provider);

        let input: &[u8] = b"only line";
        let mut output = Vec::new();
        run(&mut session, input, &mut output).await.unwrap();

        assert_eq!(provider.request_count(), 1);
        assert!(String::from_utf8(output).unwrap().ends_with(PROMPT));
    }

    #[tokio::test]
    async fn test_quit_before_any_query() {
        let provider = MockProvider::fixed("ok", Arc::new(NoOpLogger));
        let mut session = session(&provider);

        let input: &[u8] = b"QUIT\n";
        let mut output = Vec::new();
        run(&mut session, input, &mut output).await.unwrap();

        assert_eq!(provider.request_count(), 0);
        assert_eq!(session.history().len(), 0);
        assert_eq!(output, PROMPT.as_bytes());
    }
}
