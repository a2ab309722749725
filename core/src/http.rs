//! Plain-data HTTP types shared between the builder, the dispatch engine,
//! and transport implementations.
//!
//! # Design
//! Requests and responses are described as owned data (`String`, `Vec`) so a
//! transport can be written against any HTTP library without lifetime
//! plumbing. Headers are an ordered list of name/value pairs — duplicates
//! are allowed, per HTTP semantics.

use std::borrow::Cow;
use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
        }
    }

    /// Whether a request body is permitted for this method. `GET` and `HEAD`
    /// requests must not carry one; attaching a body to them is a
    /// configuration error caught before any network activity.
    pub fn allows_body(&self) -> bool {
        !matches!(self, Method::Get | Method::Head)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validated, immutable request handed to the transport.
///
/// Produced by the dispatch engine after validation and header merging.
/// Transports read it; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParts {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after the exchange completes. The body is
/// opaque bytes; interpreting it is the handlers' business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// Lossy UTF-8 view of the body.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// First header value with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
