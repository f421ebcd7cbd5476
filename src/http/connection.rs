use std::path::PathBuf;

use chrono::Utc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::{ServerConfig, StaticFilesConfig};
use crate::http::body::render_body;
use crate::http::parser::read_request;
use crate::http::request::RequestLine;
use crate::http::resource::{ResolvedResource, resolve};
use crate::http::response::{ResponseHead, StatusCode};
use crate::http::writer::ResponseWriter;

/// Handles exactly one request on one client stream, then closes it.
pub struct Connection<S> {
    stream: BufReader<S>,
    root: PathBuf,
    identity: String,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Resolving(RequestLine),
    WritingHead(ResolvedResource),
    WritingBody(ResolvedResource),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, server: &ServerConfig, static_files: &StaticFilesConfig) -> Self {
        Self {
            stream: BufReader::new(stream),
            root: static_files.root.clone(),
            identity: server.identity.clone(),
            state: ConnectionState::Reading,
        }
    }

    /// Reads the request, writes the response and shuts the stream down.
    ///
    /// Stream errors abort immediately; the stream is closed when `self` is
    /// dropped. A failure while producing the body is only logged: the head
    /// is already on the wire and cannot be taken back.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let request = read_request(&mut self.stream).await?;
                    self.state = ConnectionState::Resolving(request);
                }

                ConnectionState::Resolving(request) => {
                    let resource = resolve(&self.root, &request).await;
                    self.state = ConnectionState::WritingHead(resource);
                }

                ConnectionState::WritingHead(resource) => {
                    let status = resource.status();
                    let head = ResponseHead::new(
                        status,
                        Utc::now(),
                        self.identity.as_str(),
                        resource.family.content_type(),
                    );
                    ResponseWriter::write_head(&mut self.stream, &head).await?;

                    tracing::info!(
                        path = resource.request_path.as_deref().unwrap_or("-"),
                        status = status.as_u16(),
                        content_type = resource.family.content_type(),
                        "Response head written"
                    );

                    if status == StatusCode::Ok {
                        self.state = ConnectionState::WritingBody(resource);
                    }
                }

                ConnectionState::WritingBody(resource) => {
                    match render_body(&resource, Utc::now(), &self.identity).await {
                        Ok(Some(body)) => {
                            ResponseWriter::write_body(&mut self.stream, &body).await?;
                        }
                        Ok(None) => {}
                        Err(e) => {
                            tracing::warn!(
                                path = resource.request_path.as_deref().unwrap_or("-"),
                                error = %format!("{e:#}"),
                                "Failed to produce response body"
                            );
                        }
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        self.stream.flush().await?;
        self.stream.shutdown().await?;
        Ok(())
    }
}
