//! Abstraction over the embedded browsing engine.
//!
//! The rendering engine is an external collaborator. The shell only ever
//! talks to it through [`WebEngine`] (page lifecycle, script push, user-agent
//! control) and [`InterceptedRequest`] (the per-request hook object the
//! engine hands to the interceptor). Production adapters wrap real engine
//! handles; tests substitute fakes.
//!
//! Engine calls that the build may not support (request blocking, user-agent
//! override) return an explicit [`Enforcement`] instead of silently
//! swallowing failure, so callers can surface "decided but not enforced" to
//! the user.

use serde::{Deserialize, Serialize};

/// Opaque handle to an engine-managed page. One per open tab.
///
/// Handles are assigned by the engine adapter; the shell never interprets the
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(u64);

impl PageId {
    /// Wraps a raw engine-assigned identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page#{}", self.0)
    }
}

/// Verdict for an intercepted network request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestDecision {
    /// Let the engine issue the request.
    #[default]
    Allow,
    /// Stop the request before the engine issues it.
    Block,
}

impl RequestDecision {
    /// Returns the decision as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Block => "block",
        }
    }

    /// Returns true if the request should be blocked.
    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block)
    }
}

impl std::fmt::Display for RequestDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of asking the engine to apply a setting or block it may not
/// implement.
///
/// A decision that comes back [`Enforcement::Unsupported`] still stands; it
/// just was not carried out by this engine build. Callers report the
/// distinction through the status signal instead of retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
    /// The engine accepted and applied the request.
    Applied,
    /// The engine build does not expose the needed primitive.
    Unsupported,
}

impl Enforcement {
    /// Returns the outcome as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Unsupported => "unsupported",
        }
    }

    /// Returns true if the engine applied the request.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl std::fmt::Display for Enforcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An in-flight request surfaced by the engine's intercept hook.
///
/// The engine constructs one per outgoing request and calls the shell's
/// interceptor with it before dispatch.
pub trait InterceptedRequest {
    /// The full request URL.
    fn url(&self) -> &str;

    /// Best-effort block of the request. Engines lacking the primitive
    /// return [`Enforcement::Unsupported`] and issue the request anyway.
    fn block(&mut self) -> Enforcement;
}

/// The engine surface the shell drives.
///
/// All methods are called from the single UI/event thread. Mutating methods
/// take `&mut self` so implementations need no interior mutability.
pub trait WebEngine {
    /// Creates a page (tab) and begins loading `url`. Returns the handle the
    /// engine will use in subsequent events for this page.
    fn open_page(&mut self, url: &str) -> PageId;

    /// Destroys a page. Events for the handle stop after this call.
    fn close_page(&mut self, page: PageId);

    /// Navigates an existing page to `url`.
    fn navigate(&mut self, page: PageId, url: &str);

    /// Queues script text for execution in the page. Fire-and-forget: the
    /// call returns once the script is handed off, and a page that goes away
    /// before execution drops it silently.
    fn run_script(&mut self, page: PageId, script: &str);

    /// Replaces the page content with an inline HTML document.
    fn show_html(&mut self, page: PageId, html: &str);

    /// Returns the engine's current user-agent string.
    fn user_agent(&self) -> String;

    /// Asks the engine to use a custom user-agent for subsequent requests.
    /// An empty string restores the engine default.
    fn set_user_agent(&mut self, user_agent: &str) -> Enforcement;
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== PageId Tests ====================

    #[test]
    fn page_id_round_trips_raw_value() {
        let id = PageId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{id}"), "page#42");
    }

    #[test]
    fn page_ids_compare_by_value() {
        assert_eq!(PageId::new(7), PageId::new(7));
        assert_ne!(PageId::new(7), PageId::new(8));
    }

    // ==================== RequestDecision Tests ====================

    #[test]
    fn decision_default_is_allow() {
        assert_eq!(RequestDecision::default(), RequestDecision::Allow);
        assert!(!RequestDecision::default().is_block());
    }

    #[test]
    fn decision_as_str() {
        assert_eq!(RequestDecision::Allow.as_str(), "allow");
        assert_eq!(RequestDecision::Block.as_str(), "block");
        assert!(RequestDecision::Block.is_block());
    }

    // ==================== Enforcement Tests ====================

    #[test]
    fn enforcement_predicates() {
        assert!(Enforcement::Applied.is_applied());
        assert!(!Enforcement::Unsupported.is_applied());
    }

    #[test]
    fn enforcement_display() {
        assert_eq!(format!("{}", Enforcement::Applied), "applied");
        assert_eq!(format!("{}", Enforcement::Unsupported), "unsupported");
    }

    #[test]
    fn enforcement_serialization() {
        let json = serde_json::to_string(&Enforcement::Unsupported).unwrap();
        assert_eq!(json, "\"unsupported\"");
        let back: Enforcement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Enforcement::Unsupported);
    }
}
