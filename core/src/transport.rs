//! The transport boundary: the one collaborator the core calls into.
//!
//! # Design
//! The core never opens sockets or parses wire bytes. A [`Transport`]
//! performs the exchange and reports the outcome in one of three shapes:
//! a materialized [`Response`], a [`Fault::Status`] (the exchange completed
//! but the transport classifies the result as exceptional — status, headers
//! and body are still available), or a [`Fault::Opaque`] (no usable response:
//! connectivity, timeout, malformed reply).
//!
//! Opaque faults carry a [`FaultKind`] category instead of a concrete error
//! type, so handler lookup is a map access over a closed enum rather than
//! runtime type inspection.

use thiserror::Error;

use crate::http::{RequestParts, Response};

/// Category of an opaque fault. Keys the fault-handler table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The connection could not be established or was lost mid-exchange.
    Connect,
    /// The transport's own deadline elapsed.
    Timeout,
    /// The peer answered with something that could not be read as HTTP.
    Malformed,
    /// The request payload could not be prepared for the wire.
    Serialization,
}

impl FaultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::Connect => "connect",
            FaultKind::Timeout => "timeout",
            FaultKind::Malformed => "malformed",
            FaultKind::Serialization => "serialization",
        }
    }
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure with no usable response attached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} fault: {message}")]
pub struct OpaqueFault {
    pub kind: FaultKind,
    pub message: String,
}

impl OpaqueFault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// What a transport raises when the exchange does not produce a plain
/// response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Fault {
    /// The exchange completed but the transport surfaces the result as a
    /// failure. Status, headers and body travel with it.
    #[error("status fault: {}", .0.status)]
    Status(Response),

    /// No exchange completed.
    #[error(transparent)]
    Opaque(#[from] OpaqueFault),
}

/// The external collaborator that performs the HTTP exchange.
///
/// Invoked exactly once per dispatch, synchronously. Thread-safety of a
/// shared transport (e.g. a pooled agent) is the implementation's contract,
/// not the core's.
pub trait Transport {
    fn send(&self, request: &RequestParts) -> Result<Response, Fault>;
}

/// Optional collaborator producing headers at dispatch time.
///
/// Called once per dispatch; its headers are merged last and replace
/// same-named caller headers.
pub trait HeaderSource {
    fn headers(&self) -> Vec<(String, String)>;
}
