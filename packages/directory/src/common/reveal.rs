//! Incremental reveal ("infinite scroll") for listings.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut reveal = RevealController::new(PROJECT_REVEAL_STEP);
//!
//! // Render pass: show the visible slice, observe its last item
//! let visible = reveal.visible_slice(&filtered);
//! reveal.arm_last(visible.len());
//!
//! // Rendering layer reports the sentinel in view
//! if reveal.on_visible(visible.len() - 1) {
//!     // loaded count grew by one step, render again
//! }
//! ```

use serde::Serialize;
use tracing::debug;

use super::visibility::VisibilitySignal;

/// Projects revealed per step on the ecosystem page.
pub const PROJECT_REVEAL_STEP: usize = 12;
/// Resources revealed per step in the academy.
pub const ACADEMY_REVEAL_STEP: usize = 20;
/// Jobs revealed per step on the job board.
pub const JOB_REVEAL_STEP: usize = 25;

// ============================================================================
// RevealInfo
// ============================================================================

/// Reveal state reported alongside a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealInfo {
    /// How many items the reveal controller currently allows.
    pub loaded: usize,
    /// Are there matching items beyond the visible slice?
    pub has_more: bool,
}

impl RevealInfo {
    pub fn new(loaded: usize, total: usize) -> Self {
        Self {
            loaded,
            has_more: total > loaded,
        }
    }
}

// ============================================================================
// RevealController
// ============================================================================

/// Tracks how many items are loaded into view.
///
/// The count starts at one step and grows by one step each time the armed
/// sentinel becomes visible. There is no upper bound: advancing past the end
/// of a collection is harmless because slices saturate at its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealController {
    step: usize,
    loaded: usize,
    signal: VisibilitySignal<usize>,
}

impl RevealController {
    /// Create a controller with `loaded == step`. A zero step is raised to one.
    pub fn new(step: usize) -> Self {
        let step = step.max(1);
        Self {
            step,
            loaded: step,
            signal: VisibilitySignal::new(),
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// Overwrite the loaded count (e.g. when a view state is restored).
    ///
    /// The armed sentinel belonged to the previous rendering and is dropped;
    /// the next [`arm_last`](Self::arm_last) observes the new one.
    pub fn set_loaded(&mut self, loaded: usize) {
        self.loaded = loaded;
        self.signal.disarm();
    }

    /// `collection[0..min(loaded, len)]`.
    pub fn visible_slice<'a, T>(&self, collection: &'a [T]) -> &'a [T] {
        &collection[..self.loaded.min(collection.len())]
    }

    /// Grow the loaded count by one step.
    pub fn advance(&mut self) -> usize {
        self.loaded = self.loaded.saturating_add(self.step);
        debug!(loaded = self.loaded, step = self.step, "Reveal advanced");
        self.loaded
    }

    /// Back to the initial count, dropping any armed sentinel.
    pub fn reset(&mut self) {
        self.loaded = self.step;
        self.signal.disarm();
    }

    /// Observe the last of `rendered` items. Returns the armed index.
    ///
    /// With nothing rendered the signal is disarmed.
    pub fn arm_last(&mut self, rendered: usize) -> Option<usize> {
        match rendered.checked_sub(1) {
            Some(last) => {
                self.signal.arm(last);
                Some(last)
            }
            None => {
                self.signal.disarm();
                None
            }
        }
    }

    pub fn sentinel(&self) -> Option<usize> {
        self.signal.sentinel().copied()
    }

    /// The rendering layer saw item `index`.
    ///
    /// Advances once if `index` is the armed sentinel. The signal is disarmed
    /// before the count moves, so re-entrant reports are ignored until the
    /// next [`arm_last`](Self::arm_last).
    pub fn on_visible(&mut self, index: usize) -> bool {
        if !self.signal.fire(&index) {
            return false;
        }
        self.advance();
        true
    }
}
