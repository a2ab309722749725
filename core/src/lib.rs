//! Declarative façade over a synchronous HTTP request/response cycle.
//!
//! # Overview
//! Callers describe a request (method, URL, headers, body), register outcome
//! handlers — success, exact status codes, fault categories, a default
//! fallback — and trigger execution once. The dispatch engine invokes the
//! transport, classifies the outcome, and resolves exactly one handler.
//! The network itself is behind the [`Transport`] trait; the core never
//! touches wire bytes.
//!
//! # Design
//! - `Request<T>` is a consume-and-return builder: every configuration call
//!   takes `self` by value, and `dispatch` consumes the request, so a built
//!   request is single-use by construction.
//! - Outcomes are routed through two independent lookup tables (status code
//!   and fault category); at most one handler ever fires per dispatch.
//! - Only [`ConfigurationError`] propagates to the caller. Runtime faults are
//!   redirected to registered handlers and silently absorbed otherwise —
//!   that absorb-unless-handled policy is part of the contract.

pub mod dispatch;
pub mod error;
pub mod http;
pub mod registry;
pub mod request;
pub mod transport;

pub use dispatch::Outcome;
pub use error::ConfigurationError;
pub use http::{Method, RequestParts, Response};
pub use registry::{FaultHandler, HandlerRegistry, ResponseHandler};
pub use request::Request;
pub use transport::{Fault, FaultKind, HeaderSource, OpaqueFault, Transport};
