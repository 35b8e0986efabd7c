//! Scroll offset mirrored into a CSS custom property, once per frame.
//!
//! Scroll events arrive far more often than frames. The first event after a
//! frame sets the pending guard and asks for an animation frame; later events
//! are coalesced until that frame runs and clears the guard. The frame reads
//! the live offset, so the mirrored value is whatever the page shows then.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Pending-frame guard.
#[derive(Clone, Debug, Default)]
pub struct ScrollMirror {
    pending: bool,
}

impl ScrollMirror {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll event. Returns `true` when the caller must request an
    /// animation frame.
    pub fn on_scroll(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Run the frame update for offset `scroll_y`, returning the property
    /// value to write.
    pub fn on_frame(&mut self, scroll_y: f64) -> String {
        self.pending = false;
        format_offset(scroll_y)
    }

    /// Give up on a frame that could not be requested.
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

/// Pixel offset with two decimals, as written to the custom property.
///
/// Halves round away from zero (`0.625` becomes `"0.63"`), matching
/// `Number.prototype.toFixed`; plain `{:.2}` would round them to even.
#[must_use]
pub fn format_offset(scroll_y: f64) -> String {
    // Adding +0.0 folds -0.0 so a resting page never reads "-0.00".
    let rounded = (scroll_y * 100.0).round() / 100.0 + 0.0;
    format!("{rounded:.2}")
}
