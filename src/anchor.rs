//! Same-page anchor links that scroll smoothly instead of jumping.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// The element id a same-document link points at.
///
/// Returns `None` for links that are not fragment-only or whose fragment is
/// empty (`href="#"`), which are left to default navigation.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Outcome of a click on an in-page link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorClick<T> {
    /// Cancel navigation and smooth-scroll to this target.
    ScrollTo(T),
    /// Let the browser navigate normally.
    Default,
}

/// Decide what a click on a link with `href` does. `lookup` finds the
/// element with the given id; it is only called for a non-empty fragment.
pub fn resolve_click<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> AnchorClick<T> {
    match fragment_target(href).and_then(lookup) {
        Some(target) => AnchorClick::ScrollTo(target),
        None => AnchorClick::Default,
    }
}
