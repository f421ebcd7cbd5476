//! WebWorker - single-request static responder
//!
//! Core library: configuration, the per-connection HTTP handler and the
//! accept loop that feeds it.

pub mod config;
pub mod http;
pub mod server;
