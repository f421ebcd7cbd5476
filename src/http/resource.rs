//! Resource resolution
//!
//! Turns the request target into a filesystem location under the document
//! root and checks that it names a regular entry. The lookup is literal: no
//! normalisation, no `..` handling, no query-string stripping.

use std::path::{Path, PathBuf};

use crate::http::mime::ContentFamily;
use crate::http::request::RequestLine;
use crate::http::response::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    /// Request target as sent by the client
    pub request_path: Option<String>,
    /// Location under the document root, if there was a target at all
    pub fs_path: Option<PathBuf>,
    pub family: ContentFamily,
    /// Entry exists and is not a directory
    pub exists: bool,
}

impl ResolvedResource {
    pub fn status(&self) -> StatusCode {
        if self.exists {
            StatusCode::Ok
        } else {
            StatusCode::NotFound
        }
    }
}

/// Maps a request target to its location under `root`.
pub fn fs_path(root: &Path, request_path: &str) -> PathBuf {
    root.join(request_path.trim_start_matches('/'))
}

pub async fn resolve(root: &Path, request: &RequestLine) -> ResolvedResource {
    let Some(request_path) = request.path() else {
        return ResolvedResource {
            request_path: None,
            fs_path: None,
            family: ContentFamily::Unknown,
            exists: false,
        };
    };

    let path = fs_path(root, request_path);
    let exists = match tokio::fs::metadata(&path).await {
        Ok(meta) => !meta.is_dir(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Resource not found");
            false
        }
    };

    ResolvedResource {
        request_path: Some(request_path.to_string()),
        family: ContentFamily::from_path(request_path),
        fs_path: Some(path),
        exists,
    }
}
