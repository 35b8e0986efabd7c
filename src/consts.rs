//! Shared constants for the page enhancer.

// ── DOM contract ────────────────────────────────────────────────

/// Footer element whose text becomes the current year.
pub const YEAR_ID: &str = "year";

/// Theme toggle button.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Card that receives the parallax tilt.
pub const AVATAR_CARD_ID: &str = "avatarCard";

/// Avatar `<img>` that gets the generated fallback on load failure.
pub const AVATAR_IMAGE_ID: &str = "avatar";

pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const SKILL_BAR_SELECTOR: &str = ".skill-bar";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query consulted when no theme preference is stored.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Dataset key remembering a skill bar's target width between reveals.
pub const SKILL_WIDTH_DATA_KEY: &str = "targetWidth";

// ── Tilt ────────────────────────────────────────────────────────

/// Rotation in degrees produced by a pointer at the card's edge.
pub const TILT_MAX_DEG: f64 = 10.0;

pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

/// Forward translation applied while tilted.
pub const TILT_LIFT_PX: f64 = 6.0;

// ── Skill bars ──────────────────────────────────────────────────

/// Fraction of a bar that must be visible before it animates.
pub const SKILL_THRESHOLD: f64 = 0.5;

/// Delay between collapsing a bar to `0%` and restoring its width.
pub const SKILL_DELAY_MS: u32 = 200;

pub const SKILL_COLLAPSED_WIDTH: &str = "0%";

// ── Avatar fallback ─────────────────────────────────────────────

/// Edge length of the square fallback image, in pixels.
pub const AVATAR_SIZE_PX: u32 = 240;

pub const AVATAR_FONT_PX: u32 = 96;

/// Initials sit slightly below center so the glyph body looks centered.
pub const AVATAR_BASELINE_OFFSET_PX: f64 = 10.0;

// ── Scroll mirror ───────────────────────────────────────────────

/// Custom property on `<html>` mirroring `window.scrollY`.
pub const SCROLL_VAR: &str = "--scroll-y";
