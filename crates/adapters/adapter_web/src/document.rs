//! Page DOM as a [`Document`] port.

use picovent_app::ports::Document;
use wasm_bindgen::prelude::*;

/// The document of the current browser window.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    /// The current window's document, if running in a window context.
    #[must_use]
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    /// Run `f` once the document has been parsed.
    ///
    /// Runs immediately when `DOMContentLoaded` has already fired.
    pub fn when_loaded(&self, f: impl FnOnce() + 'static) {
        if self.document.ready_state() != "loading" {
            f();
            return;
        }
        let callback = Closure::once_into_js(f);
        if let Err(err) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            tracing::error!(error = ?err, "failed to listen for DOMContentLoaded");
        }
    }
}

impl Document for BrowserDocument {
    fn set_text(&self, element_id: &str, text: &str) -> bool {
        match self.document.get_element_by_id(element_id) {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }
}
