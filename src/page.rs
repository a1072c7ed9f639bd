//! Page-level document state shared by every chat box shown on it.
//!
//! The wrapper the boxes attach under is page-session state: created by the
//! first `show()` call, looked up by its well-known id afterwards, never
//! torn down. Holding it inside an explicit `Page` value (rather than a
//! hidden module global) keeps tests isolated — each test builds its own
//! page.

use tracing::info;

use crate::dom::ElementRef;
use crate::theme;

/// One host document. Owns the root the shared wrapper is created under.
#[derive(Debug)]
pub struct Page {
    document: ElementRef,
}

impl Page {
    /// A page with an empty document root and no wrapper yet.
    pub fn new() -> Self {
        Self {
            document: ElementRef::new("body"),
        }
    }

    /// The shared chat wrapper, created on first use and reused thereafter.
    ///
    /// Lookup is by the well-known id, so the wrapper is created exactly
    /// once per page no matter how many boxes call this how many times.
    pub fn wrapper(&mut self) -> ElementRef {
        if let Some(existing) = self.document.find_by_id(theme::WRAPPER_ID) {
            return existing;
        }
        info!(id = theme::WRAPPER_ID, "creating shared chat wrapper");
        let wrapper = ElementRef::new("div");
        wrapper.set_id(theme::WRAPPER_ID);
        self.document.append_child(&wrapper);
        wrapper
    }

    /// Document root element.
    pub fn document(&self) -> ElementRef {
        self.document.clone()
    }

    /// Serialize the whole document.
    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
