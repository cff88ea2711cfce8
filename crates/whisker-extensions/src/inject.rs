//! Page injection.
//!
//! On every page-load-finished event the driver pushes each catalog entry's
//! payload into the page through the engine's script primitive. Stylesheets
//! go first, wrapped in a small script that appends a `<style>` element to
//! the document head; raw content scripts follow. Both passes walk the
//! catalog in name order, so injection order is stable across runs.
//!
//! Everything here is fire-and-forget: the engine queues the scripts and no
//! completion is awaited. A page that navigates away mid-pass simply loses
//! the rest of the pass. The driver never deduplicates; a second load event
//! for the same page gets a full fresh pass.

use tracing::debug;
use whisker_core::engine::{PageId, WebEngine};

use crate::registry::Catalog;

/// Counts of scripts pushed during one injection pass.
///
/// These count hand-offs to the engine, not observed executions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InjectionPass {
    /// Stylesheets wrapped and pushed.
    pub styles: usize,
    /// Content scripts pushed.
    pub scripts: usize,
}

impl InjectionPass {
    /// Total scripts handed to the engine.
    pub fn total(&self) -> usize {
        self.styles + self.scripts
    }

    /// Returns true if nothing was pushed.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Pushes catalog payloads into pages as load events arrive.
#[derive(Debug, Clone, Copy, Default)]
pub struct InjectionDriver;

impl InjectionDriver {
    /// Creates a driver.
    pub fn new() -> Self {
        Self
    }

    /// Runs one full injection pass against a freshly loaded page.
    ///
    /// All stylesheets are injected before any content script, each group in
    /// catalog order.
    pub fn on_page_load_finished<E: WebEngine>(
        &self,
        engine: &mut E,
        page: PageId,
        catalog: &Catalog,
    ) -> InjectionPass {
        let mut pass = InjectionPass::default();

        for extension in catalog.iter() {
            if let Some(css) = &extension.style_sheet {
                engine.run_script(page, &style_injection_script(css));
                pass.styles += 1;
            }
        }
        for extension in catalog.iter() {
            if let Some(script) = &extension.content_script {
                engine.run_script(page, script);
                pass.scripts += 1;
            }
        }

        debug!(
            page = %page,
            styles = pass.styles,
            scripts = pass.scripts,
            "injection pass complete"
        );
        pass
    }
}

/// Wraps raw CSS in a script that appends it to the document head.
fn style_injection_script(css: &str) -> String {
    format!(
        "(function(){{\
         var style=document.createElement('style');\
         style.textContent={};\
         document.head.appendChild(style);\
         }})();",
        js_string_literal(css)
    )
}

/// Renders text as a single-quoted JavaScript string literal.
///
/// U+2028 and U+2029 are line terminators inside JavaScript string literals
/// in older engines, so they are escaped along with the usual suspects.
fn js_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
