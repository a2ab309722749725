//! Caller-visible errors.
//!
//! # Design
//! `ConfigurationError` is the only error that ever propagates out of a
//! dispatch: it means the request was malformed before any network activity.
//! Runtime faults (status-carrying or opaque) never surface here — they are
//! routed to registered handlers, or absorbed.

use thiserror::Error;

use crate::http::Method;

/// The request descriptor is incomplete or internally inconsistent.
///
/// Raised synchronously by `dispatch` before the transport is invoked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No HTTP method was configured on the request.
    #[error("no HTTP method configured")]
    MissingMethod,

    /// The request URL is empty.
    #[error("request URL is empty")]
    EmptyUrl,

    /// A body was attached to a method that forbids one.
    #[error("{0} requests cannot carry a body")]
    BodyNotAllowed(Method),
}
