use chrono::{DateTime, TimeZone, Utc};

/// Date-time layout used by the `Date` header and by `<cs371date>`.
pub const DATE_FORMAT: &str = "%a, %b %-d, %Y %-I:%M:%S %p";

/// The only body written for a 404.
pub const NOT_FOUND_BODY: &str =
    "<html><head></head><body>\n<h3>404 Not Found</h3>\n</body></html>\n";

const HTTP_VERSION: &str = "HTTP/1.1";

/// HTTP status codes this server produces.
///
/// - `Ok` (200): the resource exists and is not a directory
/// - `NotFound` (404): anything else, including requests without a `GET` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use webworker::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Formats `at` in GMT for the `Date` header.
pub fn format_http_date(at: DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Formats `at` in an arbitrary zone with the same layout as the header date.
pub fn format_date_in<Tz>(at: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(zone).format(DATE_FORMAT).to_string()
}

/// Status line plus header block of a response.
///
/// Serialized with single `\n` line endings and without `Content-Length`;
/// the connection is always closed after the body.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub status: StatusCode,
    /// Already-formatted `Date` value
    pub date: String,
    pub server: String,
    /// Written verbatim, even when empty
    pub content_type: &'static str,
}

impl ResponseHead {
    pub fn new(
        status: StatusCode,
        now: DateTime<Utc>,
        server: impl Into<String>,
        content_type: &'static str,
    ) -> Self {
        Self {
            status,
            date: format_http_date(now),
            server: server.into(),
            content_type,
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        format!(
            "{} {} {}\nDate: {}\nServer: {}\nConnection: close\nContent-Type: {}\n\n",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase(),
            self.date,
            self.server,
            self.content_type,
        )
        .into_bytes()
    }
}
