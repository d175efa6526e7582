//! One-shot visibility subscription.
//!
//! The rendering layer reports when a sentinel element (the last rendered
//! item) scrolls into view. A [`VisibilitySignal`] is armed on exactly one
//! sentinel at a time and fires at most once: firing disarms it, and nothing
//! else fires until the next render pass arms it again.

/// Single-shot, re-armable subscription keyed by sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilitySignal<K> {
    armed: Option<K>,
}

impl<K: PartialEq> VisibilitySignal<K> {
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// Observe `sentinel`, replacing any previous subscription.
    pub fn arm(&mut self, sentinel: K) {
        self.armed = Some(sentinel);
    }

    /// Stop observing. Returns the sentinel that was armed, if any.
    pub fn disarm(&mut self) -> Option<K> {
        self.armed.take()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn sentinel(&self) -> Option<&K> {
        self.armed.as_ref()
    }

    /// Report that `sentinel` became visible.
    ///
    /// Returns `true` only if it is the armed sentinel; the signal is disarmed
    /// before returning, so repeated reports are ignored.
    pub fn fire(&mut self, sentinel: &K) -> bool {
        match &self.armed {
            Some(armed) if armed == sentinel => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }
}

impl<K: PartialEq> Default for VisibilitySignal<K> {
    fn default() -> Self {
        Self::new()
    }
}
