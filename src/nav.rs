//! Mobile navigation drawer toggle.
//!
//! The drawer is a `.nav-links` container whose inline `display` flips
//! between `flex` and `none`. Opening also stamps the column layout and the
//! container styling from [`NavStyle`] inline, so the drawer looks right even
//! when the stylesheet hides it on small screens.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavStyle;

pub const OPEN_DISPLAY: &str = "flex";
pub const CLOSED_DISPLAY: &str = "none";

/// The inline `display` the drawer should take after one activation.
///
/// Only an explicit `flex` counts as open; an empty inline value (stylesheet
/// controlled) opens the drawer.
#[must_use]
pub fn next_display(current: &str) -> &'static str {
    if current.trim() == OPEN_DISPLAY { CLOSED_DISPLAY } else { OPEN_DISPLAY }
}

/// Inline declarations applied on every activation, after `display`.
#[must_use]
pub fn drawer_declarations(style: &NavStyle) -> Vec<(&'static str, String)> {
    let mut decls = vec![
        ("flex-direction", "column".to_owned()),
        ("background", style.background.clone()),
        ("padding", style.padding.clone()),
        ("border-radius", style.border_radius.clone()),
    ];
    if let Some(border) = &style.border {
        decls.push(("border", border.clone()));
    }
    decls
}
