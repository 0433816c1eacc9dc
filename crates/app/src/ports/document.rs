//! Document port — the display surface metrics are written into.

/// A set of text elements addressed by id.
///
/// In the browser this is the page DOM; natively it is a terminal status
/// board. Access happens on one thread, so implementations may use interior
/// mutability without locking.
pub trait Document {
    /// Replace the text content of `element_id` with `text`.
    ///
    /// Returns `false` (and changes nothing) when no such element exists.
    fn set_text(&self, element_id: &str, text: &str) -> bool;
}

impl<D: Document + ?Sized> Document for &D {
    fn set_text(&self, element_id: &str, text: &str) -> bool {
        (**self).set_text(element_id, text)
    }
}
