use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{NOT_FOUND_BODY, ResponseHead, StatusCode};

/// Writes response parts to the client stream.
///
/// The head is written in full before anything else; for a 404 the fixed
/// error body follows immediately and no other body may be written.
pub struct ResponseWriter;

impl ResponseWriter {
    pub async fn write_head<S>(stream: &mut S, head: &ResponseHead) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        write_all(stream, &head.serialize()).await?;

        if head.status == StatusCode::NotFound {
            write_all(stream, NOT_FOUND_BODY.as_bytes()).await?;
        }

        Ok(())
    }

    pub async fn write_body<S>(stream: &mut S, body: &[u8]) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        write_all(stream, body).await
    }
}

async fn write_all<S>(stream: &mut S, mut buf: &[u8]) -> anyhow::Result<()>
where
    S: AsyncWrite + Unpin,
{
    while !buf.is_empty() {
        let n = stream.write(buf).await?;

        if n == 0 {
            return Err(anyhow::anyhow!("connection closed while writing"));
        }

        buf = &buf[n..];
    }

    Ok(())
}
