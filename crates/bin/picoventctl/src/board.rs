//! Terminal status board — the [`Document`] of the command-line client.

use std::cell::RefCell;
use std::fmt::Write;

use picovent_app::ports::Document;

/// Placeholder for an element that was never updated.
const EMPTY: &str = "-";

/// Ordered text rows keyed by element id.
///
/// Only ids given at construction exist; writes to any other id are refused,
/// just like a page without the element.
pub struct StatusBoard {
    rows: RefCell<Vec<(String, Option<String>)>>,
}

impl StatusBoard {
    /// A board with one empty row per element id.
    pub fn new<I, S>(element_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = element_ids.into_iter().map(|id| (id.into(), None)).collect();
        Self {
            rows: RefCell::new(rows),
        }
    }

    /// Current text of `element_id`, if it exists and was updated.
    #[must_use]
    pub fn text(&self, element_id: &str) -> Option<String> {
        self.rows
            .borrow()
            .iter()
            .find(|(id, _)| id == element_id)
            .and_then(|(_, text)| text.clone())
    }

    /// One aligned `element_id  text` line per row.
    #[must_use]
    pub fn render(&self) -> String {
        let rows = self.rows.borrow();
        let width = rows.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
        let mut out = String::new();
        for (id, text) in rows.iter() {
            let text = text.as_deref().unwrap_or(EMPTY);
            let _ = writeln!(out, "{id:<width$}  {text}");
        }
        out
    }
}

impl Document for StatusBoard {
    fn set_text(&self, element_id: &str, text: &str) -> bool {
        let mut rows = self.rows.borrow_mut();
        match rows.iter_mut().find(|(id, _)| id == element_id) {
            Some((_, slot)) => {
                *slot = Some(text.to_string());
                true
            }
            None => false,
        }
    }
}
