//! Whisker Core - request filtering, engine abstraction, and browsing models.
//!
//! The engine-independent heart of the Whisker browser shell:
//!
//! - [`filter`] - substring-based request blocking with persistable state
//! - [`engine`] - the traits an embedded-engine adapter implements
//! - [`bookmarks`] - bookmark model and its legacy `Title|URL` encoding
//! - [`navigation`] - address-bar normalization and the security indicator
//! - [`status`] - transient, non-blocking status signaling
//!
//! ## Example
//!
//! ```
//! use whisker_core::filter::RequestFilter;
//! use whisker_core::navigation::normalize_url;
//!
//! let filter = RequestFilter::new();
//! let url = normalize_url("example.com");
//! assert_eq!(url, "https://example.com");
//! assert!(!filter.should_block(&url));
//! ```

pub mod bookmarks;
pub mod engine;
pub mod filter;
pub mod navigation;
pub mod status;

pub use bookmarks::Bookmark;
pub use engine::{Enforcement, InterceptedRequest, PageId, RequestDecision, WebEngine};
pub use filter::{FilterState, RequestFilter, DEFAULT_BLOCK_PATTERNS};
pub use navigation::{normalize_url, SecurityIndicator, HOME_URL};
pub use status::{NullStatus, StatusLog, StatusMessage, StatusSink};
