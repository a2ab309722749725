//! The fluent request builder.
//!
//! # Design
//! Every configuration call takes `self` by value and returns it, so a
//! chain reads like the declaration it is and there is never an aliased
//! builder. `dispatch` also consumes `self`: a built request cannot be
//! executed twice, which settles the reuse question at compile time.
//!
//! Configuration has no side effects beyond mutating the descriptor and the
//! registry — no network activity happens before `dispatch`.

use std::fmt;

use crate::dispatch::{self, Outcome};
use crate::error::ConfigurationError;
use crate::http::{Method, Response};
use crate::registry::{self, HandlerRegistry};
use crate::transport::{FaultKind, HeaderSource, OpaqueFault, Transport};

/// A single-use HTTP request description plus its outcome handlers.
///
/// `T` is the type of the value a response handler may derive; requests
/// that never produce one can use `Request<()>`.
pub struct Request<T> {
    pub(crate) method: Option<Method>,
    pub(crate) url: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<Vec<u8>>,
    pub(crate) header_source: Option<Box<dyn HeaderSource>>,
    pub(crate) registry: HandlerRegistry<T>,
}

impl<T> Request<T> {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method: Some(method),
            url: url.into(),
            headers: Vec::new(),
            body: None,
            header_source: None,
            registry: HandlerRegistry::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Append a header. Repeated names accumulate; nothing is replaced here.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a header-generation collaborator. Its headers are merged at
    /// dispatch time, last, replacing same-named explicit headers.
    pub fn header_source(mut self, source: impl HeaderSource + 'static) -> Self {
        self.header_source = Some(Box::new(source));
        self
    }

    /// Handle the conventional success code (200). The handler's return
    /// value becomes the dispatch outcome.
    pub fn on_success(mut self, handler: impl FnOnce(Response) -> T + 'static) -> Self {
        self.registry
            .register_status(registry::OK, Box::new(move |resp| Some(handler(resp))));
        self
    }

    /// Handle an exact status code, whether it arrives as a completed
    /// exchange or as a status-carrying fault. Last registration per code
    /// wins.
    pub fn on_status(mut self, code: u16, handler: impl FnOnce(Response) + 'static) -> Self {
        self.registry.register_status(
            code,
            Box::new(move |resp| {
                handler(resp);
                None
            }),
        );
        self
    }

    /// Replace the built-in pass-through default for completed exchanges
    /// with no exact match.
    pub fn on_default(mut self, handler: impl FnOnce(Response) -> Option<T> + 'static) -> Self {
        self.registry.register_default(Box::new(handler));
        self
    }

    /// Handle an opaque fault of exactly this category. Unregistered
    /// categories are absorbed silently.
    pub fn on_fault(mut self, kind: FaultKind, handler: impl FnOnce(OpaqueFault) + 'static) -> Self {
        self.registry.register_fault(kind, Box::new(handler));
        self
    }

    /// Validate, perform the exchange through `transport`, and invoke at
    /// most one handler. Only configuration problems surface as errors;
    /// every runtime fault is routed to a handler or absorbed.
    pub fn dispatch(self, transport: &dyn Transport) -> Result<Outcome<T>, ConfigurationError> {
        dispatch::run(self, transport)
    }
}

impl<T> Default for Request<T> {
    fn default() -> Self {
        Self {
            method: None,
            url: String::new(),
            headers: Vec::new(),
            body: None,
            header_source: None,
            registry: HandlerRegistry::new(),
        }
    }
}

impl<T> fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .field("has_header_source", &self.header_source.is_some())
            .field("registry", &self.registry)
            .finish()
    }
}
