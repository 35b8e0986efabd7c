//! Page configuration and cosmetic presets.
//!
//! DESIGN
//! ======
//! The portfolio ships in two flavors that only differ in colors, initials and
//! nav container styling. Both are expressed as [`PageConfig`] presets so the
//! behavior code exists exactly once. Hosts may also pass a JSON object to
//! `enhance()`: `"preset"` picks the base (`"default"` or `"warm"`) and any
//! other field overrides that base.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::{
    AVATAR_BASELINE_OFFSET_PX, AVATAR_FONT_PX, AVATAR_SIZE_PX, SCROLL_VAR, SKILL_DELAY_MS, SKILL_THRESHOLD,
    TILT_LIFT_PX, TILT_MAX_DEG, TILT_PERSPECTIVE_PX,
};
use crate::error::EnhanceError;

/// Everything the enhancer needs to know that is not DOM structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    /// Toggle glyph shown while the dark theme is active.
    pub dark_glyph: String,
    pub light_glyph: String,
    pub tilt_max_deg: f64,
    pub tilt_perspective_px: f64,
    pub tilt_lift_px: f64,
    pub nav: NavStyle,
    pub skill_threshold: f64,
    pub skill_delay_ms: u32,
    /// Stop observing a skill bar after its first reveal.
    pub skill_bars_once: bool,
    pub avatar: AvatarStyle,
    pub scroll_var: String,
    /// `log` level name for the console logger (`"info"`, `"debug"`, ...).
    pub log_level: String,
}

/// Inline styling applied to the mobile nav container when it opens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavStyle {
    pub background: String,
    pub padding: String,
    pub border_radius: String,
    pub border: Option<String>,
}

/// Appearance of the generated avatar placeholder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarStyle {
    pub size_px: u32,
    pub background: String,
    pub foreground: String,
    pub initials: String,
    pub font_px: u32,
    pub baseline_offset_px: f64,
}

/// Named base configurations, one per page flavor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Default,
    Warm,
}

impl Preset {
    #[must_use]
    pub fn config(self) -> PageConfig {
        match self {
            Self::Default => PageConfig::default(),
            Self::Warm => PageConfig::warm(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            dark_glyph: "◑".to_owned(),
            light_glyph: "◐".to_owned(),
            tilt_max_deg: TILT_MAX_DEG,
            tilt_perspective_px: TILT_PERSPECTIVE_PX,
            tilt_lift_px: TILT_LIFT_PX,
            nav: NavStyle::default(),
            skill_threshold: SKILL_THRESHOLD,
            skill_delay_ms: SKILL_DELAY_MS,
            skill_bars_once: false,
            avatar: AvatarStyle::default(),
            scroll_var: SCROLL_VAR.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl Default for NavStyle {
    fn default() -> Self {
        Self {
            background: "var(--surface)".to_owned(),
            padding: "0.7rem".to_owned(),
            border_radius: "12px".to_owned(),
            border: Some("1px solid var(--border)".to_owned()),
        }
    }
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            size_px: AVATAR_SIZE_PX,
            background: "#1c1f23".to_owned(),
            foreground: "#c16b4a".to_owned(),
            initials: "FB".to_owned(),
            font_px: AVATAR_FONT_PX,
            baseline_offset_px: AVATAR_BASELINE_OFFSET_PX,
        }
    }
}

impl PageConfig {
    /// The warmer sibling layout: light placeholder, no nav border.
    #[must_use]
    pub fn warm() -> Self {
        Self {
            nav: NavStyle {
                background: "var(--bg)".to_owned(),
                padding: "0.8rem".to_owned(),
                border_radius: "10px".to_owned(),
                border: None,
            },
            avatar: AvatarStyle {
                background: "#f4efe9".to_owned(),
                foreground: "#8a4b2f".to_owned(),
                initials: "F.B".to_owned(),
                ..AvatarStyle::default()
            },
            ..Self::default()
        }
    }

    /// Parse a JSON object. The optional `"preset"` field selects the base
    /// configuration; every other field present overrides it, nested objects
    /// field by field.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::Config`] if the JSON is malformed, is not an
    /// object, names an unknown preset, or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, EnhanceError> {
        let mut overrides: Map<String, Value> = serde_json::from_str(json)?;
        let preset = match overrides.remove("preset") {
            Some(name) => serde_json::from_value::<Preset>(name)?,
            None => Preset::Default,
        };
        let mut merged = serde_json::to_value(preset.config())?;
        merge_into(&mut merged, Value::Object(overrides));
        Ok(serde_json::from_value(merged)?)
    }

    /// Log level for the console logger; unknown names fall back to `Info`.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Overlay `patch` onto `base`, descending into objects present on both sides.
fn merge_into(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge_into(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
