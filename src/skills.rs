//! Skill bar fill animation.
//!
//! A bar that becomes at least half visible collapses to `0%` and, after a
//! short delay, springs back to its target width; the stylesheet's width
//! transition does the animating. Bars re-animate on every re-entry unless
//! [`crate::config::PageConfig::skill_bars_once`] is set.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::consts::SKILL_COLLAPSED_WIDTH;

/// What to do with one bar that crossed the visibility threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealPlan {
    /// Width restored once the delay elapses.
    pub target_width: String,
    pub delay_ms: u32,
    /// Store `target_width` on the element for later reveals.
    pub remember: bool,
    /// Stop observing this bar after this reveal.
    pub unobserve: bool,
}

/// One inline width change, applied `after_ms` after the reveal fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidthStep {
    pub after_ms: u32,
    pub width: String,
}

impl RevealPlan {
    /// Width changes in the order they must be applied: collapse now, then
    /// restore once the delay elapses.
    #[must_use]
    pub fn steps(&self) -> [WidthStep; 2] {
        [
            WidthStep { after_ms: 0, width: SKILL_COLLAPSED_WIDTH.to_owned() },
            WidthStep { after_ms: self.delay_ms, width: self.target_width.clone() },
        ]
    }
}

/// Decide how to animate a bar for one intersection entry.
///
/// `remembered` is the width stored by an earlier reveal; when present it
/// wins over the current inline width, which may still be the collapsed
/// value if the bar re-entered before its timer fired.
#[must_use]
pub fn plan_reveal(
    is_intersecting: bool,
    remembered: Option<&str>,
    inline_width: &str,
    delay_ms: u32,
    once: bool,
) -> Option<RevealPlan> {
    if !is_intersecting {
        return None;
    }
    let (target_width, remember) = match remembered {
        Some(width) => (width.to_owned(), false),
        None => (inline_width.to_owned(), true),
    };
    Some(RevealPlan { target_width, delay_ms, remember, unobserve: once })
}
