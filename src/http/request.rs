/// The part of an incoming request this server acts on.
///
/// Only the resource path of the retrieval line is kept; every other header
/// line is read and discarded. `path` stays `None` when no well-formed `GET`
/// line was seen, which resolves to a 404.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLine {
    /// The request target exactly as sent (e.g. "/index.html")
    pub path: Option<String>,
}

impl RequestLine {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}
