use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::request::RequestLine;

/// The only method this server answers.
const RETRIEVAL_METHOD: &str = "GET";

/// Longest header line kept in memory, terminator included.
pub const MAX_LINE_LEN: u64 = 8192;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A `GET` line without both a method/target and a target/version separator.
    MalformedRequestLine,
    /// A header line longer than `MAX_LINE_LEN`.
    LineTooLong,
}

/// Extracts the resource path from one header line.
///
/// Returns `Ok(None)` for lines that are not retrieval lines. For a line like
/// `GET /index.html HTTP/1.1` the path is everything strictly between the
/// first and the last space.
pub fn extract_resource_path(line: &str) -> Result<Option<String>, ParseError> {
    if !line.starts_with(RETRIEVAL_METHOD) {
        return Ok(None);
    }

    let first = line.find(' ').ok_or(ParseError::MalformedRequestLine)?;
    let last = line.rfind(' ').ok_or(ParseError::MalformedRequestLine)?;
    if first == last {
        return Err(ParseError::MalformedRequestLine);
    }

    Ok(Some(line[first + 1..last].to_string()))
}

/// Reads the request header block up to and including the blank line.
///
/// EOF before the blank line also ends the block; whatever was seen up to
/// that point is used. Lines longer than `MAX_LINE_LEN` are skipped whole.
/// Read errors are returned to the caller.
pub async fn read_request<R>(reader: &mut R) -> std::io::Result<RequestLine>
where
    R: AsyncBufRead + Unpin,
{
    let mut request = RequestLine::default();
    let mut buf = Vec::with_capacity(256);
    let mut skipping = false;

    loop {
        buf.clear();
        let n = (&mut *reader)
            .take(MAX_LINE_LEN)
            .read_until(b'\n', &mut buf)
            .await?;
        if n == 0 {
            tracing::debug!("Peer closed before end of request header");
            break;
        }

        let complete = buf.ends_with(b"\n");
        if !complete && n as u64 == MAX_LINE_LEN {
            if !skipping {
                tracing::warn!(error = ?ParseError::LineTooLong, "Skipping overlong request line");
            }
            skipping = true;
            continue;
        }
        if skipping {
            // Tail of the overlong line.
            skipping = !complete;
            continue;
        }

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        tracing::debug!(line = %line, "Request line");

        if line.is_empty() {
            break;
        }

        match extract_resource_path(&line) {
            Ok(Some(path)) => request.path = Some(path),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(line = %line, error = ?e, "Ignoring malformed request line");
            }
        }
    }

    Ok(request)
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
