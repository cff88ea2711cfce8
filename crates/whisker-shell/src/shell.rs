//! The browser shell.
//!
//! [`BrowserShell`] wires the filter, extension catalog, and persistence
//! store to an engine adapter. The chrome layer forwards engine events here
//! (request interception, load finished, URL changes) and calls the
//! operation methods from its menus and toolbar; the shell keeps the
//! in-memory state, syncs it to the store, and reports outcomes through the
//! status sink. Nothing in here draws UI.
//!
//! One shell serves one browsing profile. Failures never escape: persistence
//! write errors and unsupported engine primitives become a `warn` log line
//! plus a transient status message, and the operation otherwise completes.

use tracing::{debug, info, warn};

use whisker_core::bookmarks::Bookmark;
use whisker_core::engine::{
    Enforcement, InterceptedRequest, PageId, RequestDecision, WebEngine,
};
use whisker_core::filter::RequestFilter;
use whisker_core::navigation::normalize_url;
use whisker_core::status::{StatusMessage, StatusSink};
use whisker_extensions::{ensure_dark_mode, Catalog, ExtensionRegistry, InjectionDriver, InjectionPass};
use whisker_storage::{PersistenceStore, SettingsBackend};

use crate::config::ShellConfig;
use crate::tabs::TabStrip;

/// Headless browser shell for one browsing profile.
///
/// Owns the engine adapter, the request filter, the extension catalog, the
/// open-tab list, and the persistence store. All methods run on the single
/// UI/event thread.
pub struct BrowserShell<E, B, S>
where
    E: WebEngine,
    B: SettingsBackend,
    S: StatusSink,
{
    engine: E,
    store: PersistenceStore<B>,
    status: S,
    config: ShellConfig,
    filter: RequestFilter,
    bookmarks: Vec<Bookmark>,
    catalog: Catalog,
    injector: InjectionDriver,
    tabs: TabStrip,
}

impl<E, B, S> BrowserShell<E, B, S>
where
    E: WebEngine,
    B: SettingsBackend,
    S: StatusSink,
{
    /// Starts a shell: restores persisted state, loads extensions, restores
    /// the session (non-private profiles), and opens the home page if no tab
    /// was restored.
    pub fn start(engine: E, store: PersistenceStore<B>, config: ShellConfig, status: S) -> Self {
        info!(profile = %config.profile, "starting browser shell");

        let mut shell = Self {
            filter: RequestFilter::restore(store.filter_state()),
            bookmarks: store.bookmarks(),
            catalog: Catalog::new(),
            injector: InjectionDriver::new(),
            tabs: TabStrip::new(),
            engine,
            store,
            status,
            config,
        };

        shell.apply_saved_user_agent();
        shell.load_extensions();
        shell.restore_session();
        if shell.tabs.is_empty() {
            let home = shell.config.home_url.clone();
            shell.open_tab(&home);
        }
        shell.announce_adblock_state();

        info!(
            profile = %shell.config.profile,
            tabs = shell.tabs.len(),
            extensions = shell.catalog.len(),
            bookmarks = shell.bookmarks.len(),
            "browser shell started"
        );
        shell
    }

    // ==================== Engine events ====================

    /// Decides an intercepted request and asks the engine to enforce a
    /// block.
    ///
    /// The decision stands even when the engine cannot enforce it; the
    /// enforcement gap is reported through the status sink and the caller
    /// still receives [`RequestDecision::Block`].
    pub fn intercept_request(&mut self, request: &mut dyn InterceptedRequest) -> RequestDecision {
        if !self.filter.should_block(request.url()) {
            return RequestDecision::Allow;
        }
        if request.block() == Enforcement::Unsupported {
            warn!(url = %request.url(), "engine could not enforce request block");
            self.status.show(StatusMessage::failure(
                "Ad blocking not supported by this engine",
            ));
        }
        RequestDecision::Block
    }

    /// Handles a page's load-finished event.
    ///
    /// Failed loads get the inline error page first. The injection pass runs
    /// on every load event regardless of the success flag, so the error page
    /// is styled like any other page.
    pub fn page_load_finished(&mut self, page: PageId, ok: bool) -> InjectionPass {
        self.status
            .show(StatusMessage::new(if ok { "Done" } else { "Load failed" }));
        if !ok {
            let url = self.tabs.url_of(page).unwrap_or_default().to_string();
            let html = error_page_html(&url);
            self.engine.show_html(page, &html);
        }
        self.injector
            .on_page_load_finished(&mut self.engine, page, &self.catalog)
    }

    /// Records a page's new URL so the session snapshot stays current.
    pub fn page_url_changed(&mut self, page: PageId, url: &str) {
        self.tabs.set_url(page, url);
    }

    // ==================== Tabs ====================

    /// Opens a new tab at `url`. Returns the engine's page handle.
    pub fn open_tab(&mut self, url: &str) -> PageId {
        let page = self.engine.open_page(url);
        self.tabs.push(page, url);
        debug!(%page, url, "tab opened");
        page
    }

    /// Closes a tab and saves the session.
    ///
    /// Closing the last tab opens the home page first so at least one tab
    /// always exists. Unknown handles are ignored.
    pub fn close_tab(&mut self, page: PageId) {
        if !self.tabs.contains(page) {
            return;
        }
        if self.tabs.len() <= 1 {
            let home = self.config.home_url.clone();
            self.open_tab(&home);
        }
        self.tabs.remove(page);
        self.engine.close_page(page);
        self.save_session();
    }

    /// Normalizes free-form address-bar input and navigates `page` to the
    /// result. Returns the URL actually loaded.
    pub fn open_address(&mut self, page: PageId, text: &str) -> String {
        let url = normalize_url(text);
        self.engine.navigate(page, &url);
        self.tabs.set_url(page, &url);
        url
    }

    // ==================== Bookmarks ====================

    /// Adds a bookmark and syncs the list to the store.
    pub fn add_bookmark(&mut self, title: &str, url: &str) {
        self.bookmarks.push(Bookmark::new(title, url));
        let result = self.store.set_bookmarks(&self.bookmarks);
        self.persist("bookmarks", result);
        self.status.show(StatusMessage::new("Bookmark added"));
    }

    /// Removes the bookmark at `index` and syncs the list to the store.
    /// Returns the removed bookmark, or `None` for an out-of-range index.
    pub fn remove_bookmark(&mut self, index: usize) -> Option<Bookmark> {
        if index >= self.bookmarks.len() {
            return None;
        }
        let removed = self.bookmarks.remove(index);
        let result = self.store.set_bookmarks(&self.bookmarks);
        self.persist("bookmarks", result);
        Some(removed)
    }

    /// The bookmark list, in order.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    // ==================== Ad blocking ====================

    /// Flips ad blocking, persists the flag, and announces the new state.
    /// Returns the new enabled value.
    pub fn toggle_adblock(&mut self) -> bool {
        let enabled = self.filter.toggle();
        let result = self.store.set_adblock_enabled(enabled);
        self.persist("ad-block settings", result);
        self.status.show(StatusMessage::new(if enabled {
            "AdBlock enabled"
        } else {
            "AdBlock disabled"
        }));
        enabled
    }

    /// Returns true if ad blocking is currently enabled.
    pub fn adblock_enabled(&self) -> bool {
        self.filter.is_enabled()
    }

    // ==================== User agent ====================

    /// Persists and applies a user-agent override. An empty string resets
    /// to the engine default.
    ///
    /// The override is persisted even when the engine cannot apply it:
    /// the stored value is user intent, and support can differ on the next
    /// run. The enforcement result drives the status message.
    pub fn set_user_agent_override(&mut self, user_agent: &str) {
        let result = self.store.set_user_agent(user_agent);
        self.persist("user agent", result);

        match self.engine.set_user_agent(user_agent) {
            Enforcement::Applied => {
                self.status.show(StatusMessage::new(if user_agent.is_empty() {
                    "User-Agent reset to default"
                } else {
                    "Custom User-Agent saved"
                }));
            }
            Enforcement::Unsupported => {
                warn!("engine does not support user-agent override");
                self.status.show(StatusMessage::failure(
                    "Failed to set User-Agent (engine limitation)",
                ));
            }
        }
    }

    /// The engine's current user-agent string.
    pub fn user_agent(&self) -> String {
        self.engine.user_agent()
    }

    // ==================== Session and shutdown ====================

    /// Saves the open-tab URLs for a later restore. Private profiles never
    /// write the session.
    pub fn save_session(&mut self) {
        if !self.config.profile.persists_session() {
            return;
        }
        let urls = self.tabs.urls();
        let result = self.store.set_session_urls(&urls);
        self.persist("session", result);
    }

    /// Full shutdown sync: session, bookmarks, and the filter state.
    ///
    /// The configured pattern list is persisted even while the filter is
    /// disabled, so disabling and quitting never loses it.
    pub fn shutdown(&mut self) {
        info!(profile = %self.config.profile, "shutting down browser shell");
        self.save_session();
        let result = self.store.set_bookmarks(&self.bookmarks);
        self.persist("bookmarks", result);
        let state = self.filter.state();
        let result = self.store.save_filter_state(&state);
        self.persist("ad-block settings", result);
    }

    // ==================== Accessors ====================

    /// The loaded extension catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The open-tab list.
    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    /// The shell configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The engine adapter.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    // ==================== Startup helpers ====================

    fn apply_saved_user_agent(&mut self) {
        let saved = self.store.user_agent();
        if saved.is_empty() {
            return;
        }
        if self.engine.set_user_agent(&saved) == Enforcement::Unsupported {
            warn!("engine rejected the saved user-agent override");
            self.status.show(StatusMessage::failure(
                "Failed to set User-Agent (engine limitation)",
            ));
        }
    }

    fn load_extensions(&mut self) {
        let registry = ExtensionRegistry::new(&self.config.extensions_root);
        if let Err(e) = ensure_dark_mode(registry.root()) {
            warn!(error = %e, "could not seed bundled extensions");
        }
        self.catalog = match registry.scan() {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "extension scan failed, continuing without extensions");
                self.status
                    .show(StatusMessage::failure("Extensions unavailable"));
                Catalog::new()
            }
        };
    }

    fn restore_session(&mut self) {
        if !self.config.profile.persists_session() {
            return;
        }
        for url in self.store.session_urls() {
            self.open_tab(&url);
        }
    }

    fn announce_adblock_state(&mut self) {
        self.status.show(StatusMessage::brief(if self.filter.is_enabled() {
            "AdBlock: ON"
        } else {
            "AdBlock: OFF"
        }));
    }

    /// Absorbs a persistence write failure into a log line and a status
    /// message. Writes are best-effort; the in-memory state stays ahead.
    fn persist(&mut self, what: &str, result: whisker_storage::Result<()>) {
        if let Err(e) = result {
            warn!(what, error = %e, "persistence write failed");
            self.status
                .show(StatusMessage::failure(format!("Failed to save {what}")));
        }
    }
}

/// Renders the inline document shown when a page load fails.
pub fn error_page_html(url: &str) -> String {
    format!(
        "<html><body style=\"font-family:system-ui;margin:40px\">\
         <h2>Well, that didn't work.</h2>\
         <p>Whisker couldn't fetch <code>{}</code>.</p>\
         <p>Check your connection or try again.</p>\
         </body></html>",
        html_escape(url)
    )
}

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
