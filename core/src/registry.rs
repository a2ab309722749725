//! Outcome-to-handler lookup tables.
//!
//! # Design
//! Two independent maps, both keyed by what actually happened at execution
//! time: status code → response handler, and fault category → fault handler.
//! The status table owns a default slot that is always resolvable — seeded
//! with the built-in pass-through and overwritten if the caller registers a
//! default of their own. The fault table has no fallback: categories are
//! strictly opt-in.
//!
//! Handlers are `FnOnce` and resolution takes them out of the table, which
//! matches the single-use lifecycle of a request: a registry never outlives
//! one dispatch.

use std::collections::HashMap;
use std::fmt;

use crate::http::Response;
use crate::transport::{FaultKind, OpaqueFault};

/// Handles a classified response and may produce a derived value.
pub type ResponseHandler<T> = Box<dyn FnOnce(Response) -> Option<T>>;

/// Handles an opaque fault, for side effects only.
pub type FaultHandler = Box<dyn FnOnce(OpaqueFault)>;

/// The conventional success code `on_success` registers against.
pub(crate) const OK: u16 = 200;

/// Result of a status lookup on the happy path.
pub enum StatusResolution<T> {
    /// A caller-registered handler (exact or default slot).
    Handler(ResponseHandler<T>),
    /// Nothing registered: the built-in pass-through applies and the raw
    /// response goes back to the caller.
    Passthrough,
}

/// Lookup tables mapping outcomes to handlers for a single request.
pub struct HandlerRegistry<T> {
    exact: HashMap<u16, ResponseHandler<T>>,
    /// `None` means the built-in pass-through is still in place.
    default: Option<ResponseHandler<T>>,
    faults: HashMap<FaultKind, FaultHandler>,
}

impl<T> HandlerRegistry<T> {
    pub fn new() -> Self {
        Self {
            exact: HashMap::new(),
            default: None,
            faults: HashMap::new(),
        }
    }

    /// Register a handler for an exact status code. Last write wins.
    pub fn register_status(&mut self, code: u16, handler: ResponseHandler<T>) {
        self.exact.insert(code, handler);
    }

    /// Overwrite the default slot. Last write wins.
    pub fn register_default(&mut self, handler: ResponseHandler<T>) {
        self.default = Some(handler);
    }

    /// Register a handler for an exact fault category. Last write wins.
    pub fn register_fault(&mut self, kind: FaultKind, handler: FaultHandler) {
        self.faults.insert(kind, handler);
    }

    /// Resolve a handler for a completed exchange: exact code first, then
    /// the caller default, then the built-in pass-through. Always resolves.
    pub fn take_status(&mut self, code: u16) -> StatusResolution<T> {
        if let Some(handler) = self.exact.remove(&code) {
            return StatusResolution::Handler(handler);
        }
        match self.default.take() {
            Some(handler) => StatusResolution::Handler(handler),
            None => StatusResolution::Passthrough,
        }
    }

    /// Resolve an exact status handler only — the status-fault branch never
    /// falls back to the default slot.
    pub fn take_exact(&mut self, code: u16) -> Option<ResponseHandler<T>> {
        self.exact.remove(&code)
    }

    /// Resolve a fault handler by exact category.
    pub fn take_fault(&mut self, kind: FaultKind) -> Option<FaultHandler> {
        self.faults.remove(&kind)
    }
}

impl<T> Default for HandlerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for HandlerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut statuses: Vec<u16> = self.exact.keys().copied().collect();
        statuses.sort_unstable();
        let mut kinds: Vec<FaultKind> = self.faults.keys().copied().collect();
        kinds.sort_by_key(|k| k.as_str());
        f.debug_struct("HandlerRegistry")
            .field("statuses", &statuses)
            .field("has_default", &self.default.is_some())
            .field("fault_kinds", &kinds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler(tag: &'static str) -> ResponseHandler<&'static str> {
        Box::new(move |_| Some(tag))
    }

    #[test]
    fn exact_match_wins_over_default() {
        let mut reg = HandlerRegistry::new();
        reg.register_status(404, handler("exact"));
        reg.register_default(handler("default"));

        match reg.take_status(404) {
            StatusResolution::Handler(h) => assert_eq!(
                h(Response {
                    status: 404,
                    headers: Vec::new(),
                    body: Vec::new()
                }),
                Some("exact")
            ),
            StatusResolution::Passthrough => panic!("expected exact handler"),
        }
    }

    #[test]
    fn default_slot_catches_unregistered_codes() {
        let mut reg = HandlerRegistry::new();
        reg.register_default(handler("default"));

        match reg.take_status(500) {
            StatusResolution::Handler(h) => assert_eq!(
                h(Response {
                    status: 500,
                    headers: Vec::new(),
                    body: Vec::new()
                }),
                Some("default")
            ),
            StatusResolution::Passthrough => panic!("expected default handler"),
        }
    }

    #[test]
    fn empty_registry_resolves_to_passthrough() {
        let mut reg: HandlerRegistry<()> = HandlerRegistry::new();
        assert!(matches!(reg.take_status(200), StatusResolution::Passthrough));
    }

    #[test]
    fn registration_is_last_write_wins() {
        let mut reg = HandlerRegistry::new();
        reg.register_status(404, handler("first"));
        reg.register_status(404, handler("second"));

        match reg.take_status(404) {
            StatusResolution::Handler(h) => assert_eq!(
                h(Response {
                    status: 404,
                    headers: Vec::new(),
                    body: Vec::new()
                }),
                Some("second")
            ),
            StatusResolution::Passthrough => panic!("expected handler"),
        }
    }

    #[test]
    fn exact_lookup_has_no_default_fallback() {
        let mut reg = HandlerRegistry::new();
        reg.register_default(handler("default"));
        assert!(reg.take_exact(404).is_none());
    }

    #[test]
    fn fault_lookup_is_exact_category_only() {
        let mut reg: HandlerRegistry<()> = HandlerRegistry::new();
        reg.register_fault(FaultKind::Connect, Box::new(|_| {}));
        assert!(reg.take_fault(FaultKind::Timeout).is_none());
        assert!(reg.take_fault(FaultKind::Connect).is_some());
    }

    #[test]
    fn resolution_consumes_the_entry() {
        let mut reg = HandlerRegistry::new();
        reg.register_status(404, handler("once"));
        assert!(reg.take_exact(404).is_some());
        assert!(reg.take_exact(404).is_none());
    }

    #[test]
    fn debug_lists_registered_keys() {
        let mut reg: HandlerRegistry<()> = HandlerRegistry::new();
        reg.register_status(500, Box::new(|_| None));
        reg.register_status(404, Box::new(|_| None));
        reg.register_fault(FaultKind::Timeout, Box::new(|_| {}));
        let rendered = format!("{reg:?}");
        assert!(rendered.contains("[404, 500]"), "{rendered}");
        assert!(rendered.contains("Timeout"), "{rendered}");
    }
}
