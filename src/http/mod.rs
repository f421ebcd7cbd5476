//! HTTP protocol implementation.
//!
//! A deliberately small responder: one request per connection, `GET` only,
//! and the connection is closed after the response.
//!
//! # Architecture
//!
//! - **`connection`**: drives one connection through the steps below
//! - **`parser`**: reads the header block and extracts the request target
//! - **`request`**: the extracted request target
//! - **`mime`**: content family and `Content-Type` from the file extension
//! - **`resource`**: maps the target onto the document root
//! - **`response`**: status codes and the response head
//! - **`writer`**: writes the head (plus the fixed 404 body) and bodies
//! - **`body`**: HTML token substitution and image re-encoding
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read lines up to the blank line
//!        └──────┬──────┘
//!               │ Request target (maybe none)
//!               ▼
//!        ┌──────────────────┐
//!        │   Resolving      │ ← Look up the file, pick the content family
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   WritingHead    │ ← Status line + headers (+ 404 body)
//!        └──────┬───────────┘
//!               ├─ 404 → Closed
//!               ▼
//!        ┌──────────────────┐
//!        │   WritingBody    │ ← Rendered HTML / re-encoded image / nothing
//!        └──────┬───────────┘
//!               └─ Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use webworker::config::Config;
//! use webworker::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::default();
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let conn = Connection::new(socket, &cfg.server, &cfg.static_files);
//!         tokio::spawn(async move {
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod body;
pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resource;
pub mod response;
pub mod writer;
