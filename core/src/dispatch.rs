//! The dispatch engine: validate, send once, classify, invoke one handler.
//!
//! # Design
//! Exactly one transport call per dispatch, and at most one handler fires —
//! resolution is a single map lookup per classified shape, never an
//! iteration. Unhandled faults are absorbed on purpose: the only error a
//! caller ever sees from `run` is a [`ConfigurationError`] raised before
//! the transport is touched.

use log::debug;

use crate::error::ConfigurationError;
use crate::http::{RequestParts, Response};
use crate::registry::{HandlerRegistry, StatusResolution};
use crate::request::Request;
use crate::transport::{Fault, OpaqueFault, Transport};

/// What a dispatch produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// A registered handler fired, carrying whatever value it derived.
    Handled(Option<T>),
    /// The exchange completed and nothing was registered for its status:
    /// the built-in pass-through hands the raw response back.
    Passthrough(Response),
    /// A fault occurred and no handler was registered for it. Swallowed,
    /// by contract.
    Absorbed,
}

impl<T> Outcome<T> {
    /// The derived value, if a handler produced one.
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Handled(value) => value,
            _ => None,
        }
    }

    pub fn is_absorbed(&self) -> bool {
        matches!(self, Outcome::Absorbed)
    }
}

pub(crate) fn run<T>(
    request: Request<T>,
    transport: &dyn Transport,
) -> Result<Outcome<T>, ConfigurationError> {
    let Request {
        method,
        url,
        headers,
        body,
        header_source,
        mut registry,
    } = request;

    let method = method.ok_or(ConfigurationError::MissingMethod)?;
    if url.is_empty() {
        return Err(ConfigurationError::EmptyUrl);
    }
    if body.is_some() && !method.allows_body() {
        return Err(ConfigurationError::BodyNotAllowed(method));
    }

    let headers = match header_source {
        Some(source) => merge_headers(headers, source.headers()),
        None => headers,
    };

    let parts = RequestParts {
        method,
        url,
        headers,
        body,
    };

    debug!("dispatching {} {}", parts.method, parts.url);
    match transport.send(&parts) {
        Ok(response) => Ok(on_response(&mut registry, response)),
        Err(Fault::Status(response)) => Ok(on_status_fault(&mut registry, response)),
        Err(Fault::Opaque(fault)) => Ok(on_opaque_fault(&mut registry, fault)),
    }
}

/// Completed exchange: exact code, else the default slot, else pass-through.
fn on_response<T>(registry: &mut HandlerRegistry<T>, response: Response) -> Outcome<T> {
    debug!("exchange completed with status {}", response.status);
    match registry.take_status(response.status) {
        StatusResolution::Handler(handler) => Outcome::Handled(handler(response)),
        StatusResolution::Passthrough => Outcome::Passthrough(response),
    }
}

/// Status-carrying fault: exact code only, no default fallback.
fn on_status_fault<T>(registry: &mut HandlerRegistry<T>, response: Response) -> Outcome<T> {
    match registry.take_exact(response.status) {
        Some(handler) => Outcome::Handled(handler(response)),
        None => {
            debug!("absorbing unhandled status fault {}", response.status);
            Outcome::Absorbed
        }
    }
}

/// Opaque fault: exact category only.
fn on_opaque_fault<T>(registry: &mut HandlerRegistry<T>, fault: OpaqueFault) -> Outcome<T> {
    match registry.take_fault(fault.kind) {
        Some(handler) => {
            handler(fault);
            Outcome::Handled(None)
        }
        None => {
            debug!("absorbing unhandled {fault}");
            Outcome::Absorbed
        }
    }
}

/// Merge generated headers after explicit ones. A generated header replaces
/// every explicit header with the same name (ASCII case-insensitive) and is
/// appended, so generated values always win.
fn merge_headers(
    mut explicit: Vec<(String, String)>,
    generated: Vec<(String, String)>,
) -> Vec<(String, String)> {
    for (name, value) in generated {
        explicit.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        explicit.push((name, value));
    }
    explicit
}
