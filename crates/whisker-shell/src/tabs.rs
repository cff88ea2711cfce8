//! The open-tab list.
//!
//! [`TabStrip`] mirrors the engine's open pages in tab order and tracks each
//! page's last known URL. It is the source of the session snapshot: the
//! saved session is exactly [`TabStrip::urls`] at save time.

use whisker_core::engine::PageId;

/// One open tab: an engine page handle plus its last known URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Engine handle for this tab's page.
    pub page: PageId,
    /// Most recent URL reported for the page.
    pub url: String,
}

/// Ordered list of open tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStrip {
    tabs: Vec<Tab>,
}

impl TabStrip {
    /// Creates an empty strip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tab at the end of the strip.
    pub fn push(&mut self, page: PageId, url: impl Into<String>) {
        self.tabs.push(Tab {
            page,
            url: url.into(),
        });
    }

    /// Removes the tab for `page`, returning it if it was present.
    pub fn remove(&mut self, page: PageId) -> Option<Tab> {
        let index = self.tabs.iter().position(|t| t.page == page)?;
        Some(self.tabs.remove(index))
    }

    /// Updates the URL tracked for `page`. Returns false for unknown pages.
    pub fn set_url(&mut self, page: PageId, url: impl Into<String>) -> bool {
        match self.tabs.iter_mut().find(|t| t.page == page) {
            Some(tab) => {
                tab.url = url.into();
                true
            }
            None => false,
        }
    }

    /// The URL tracked for `page`, if the page is an open tab.
    pub fn url_of(&self, page: PageId) -> Option<&str> {
        self.tabs
            .iter()
            .find(|t| t.page == page)
            .map(|t| t.url.as_str())
    }

    /// Returns true if `page` is an open tab.
    pub fn contains(&self, page: PageId) -> bool {
        self.tabs.iter().any(|t| t.page == page)
    }

    /// Session snapshot: every tab's URL, in tab order.
    pub fn urls(&self) -> Vec<String> {
        self.tabs.iter().map(|t| t.url.clone()).collect()
    }

    /// Iterates tabs in order.
    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    /// Number of open tabs.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Returns true if no tab is open.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_tab_order() {
        let mut strip = TabStrip::new();
        strip.push(PageId::new(1), "https://one.test/");
        strip.push(PageId::new(2), "https://two.test/");

        assert_eq!(strip.len(), 2);
        assert_eq!(
            strip.urls(),
            vec!["https://one.test/", "https://two.test/"]
        );
    }

    #[test]
    fn remove_returns_the_tab() {
        let mut strip = TabStrip::new();
        strip.push(PageId::new(1), "https://one.test/");
        strip.push(PageId::new(2), "https://two.test/");

        let removed = strip.remove(PageId::new(1)).unwrap();
        assert_eq!(removed.url, "https://one.test/");
        assert_eq!(strip.len(), 1);
        assert!(!strip.contains(PageId::new(1)));
        assert!(strip.remove(PageId::new(1)).is_none());
    }

    #[test]
    fn set_url_tracks_navigation() {
        let mut strip = TabStrip::new();
        strip.push(PageId::new(1), "https://start.test/");

        assert!(strip.set_url(PageId::new(1), "https://moved.test/"));
        assert_eq!(strip.url_of(PageId::new(1)), Some("https://moved.test/"));
        assert!(!strip.set_url(PageId::new(9), "https://nowhere.test/"));
    }

    #[test]
    fn middle_removal_preserves_order() {
        let mut strip = TabStrip::new();
        strip.push(PageId::new(1), "a");
        strip.push(PageId::new(2), "b");
        strip.push(PageId::new(3), "c");

        strip.remove(PageId::new(2));
        assert_eq!(strip.urls(), vec!["a", "c"]);
    }

    #[test]
    fn empty_strip_reports_empty() {
        let strip = TabStrip::new();
        assert!(strip.is_empty());
        assert!(strip.urls().is_empty());
        assert!(strip.url_of(PageId::new(1)).is_none());
    }
}
