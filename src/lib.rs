//! Client-side enhancements for a portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page. It stamps
//! the footer year, manages the light/dark theme, tilts the avatar card,
//! opens the mobile nav drawer, animates skill bars, substitutes a generated
//! avatar when the photo fails, smooths in-page anchor scrolling, and mirrors
//! the scroll offset into a CSS variable. The markup and stylesheet stay in
//! the page; this crate only looks elements up and mutates them.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`enhancer`] | Browser wiring and the testable [`enhancer::EnhancerCore`] |
//! | [`theme`] | Theme resolution and the [`theme::PreferenceStore`] seam |
//! | [`tilt`] | Pointer-to-rotation mapping for the avatar card |
//! | [`nav`] | Mobile nav drawer toggle |
//! | [`skills`] | Skill bar reveal planning |
//! | [`avatar`] | Offscreen placeholder rendering |
//! | [`anchor`] | Same-page link resolution |
//! | [`scroll`] | Frame-coalesced scroll offset mirror |
//! | [`config`] | [`config::PageConfig`] and cosmetic presets |
//! | [`dom`] | `web-sys` lookup and listener helpers |
//! | [`consts`] | DOM contract names and default numbers |

pub mod anchor;
pub mod avatar;
pub mod config;
pub mod consts;
pub mod dom;
pub mod enhancer;
pub mod error;
pub mod nav;
pub mod scroll;
pub mod skills;
pub mod theme;
pub mod tilt;

use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::config::PageConfig;
use crate::enhancer::{Enhancer, InstallGuard};
use crate::error::EnhanceError;

thread_local! {
    static INSTALLED: InstallGuard = const { InstallGuard::new() };
}

/// Module entry point: installs the panic hook and console logger and, with
/// the `autostart` feature, enhances the page with the default preset.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("enhance: logger already installed");
    }
    #[cfg(feature = "autostart")]
    if let Err(err) = run(PageConfig::default()) {
        log::error!("enhance: {err}");
    }
}

/// Enhance the page using a JSON configuration, e.g. `{"preset": "warm"}`;
/// omitted fields come from the chosen preset. Build without `autostart`
/// when calling this, since a page is only enhanced once.
///
/// # Errors
///
/// Throws if the page was already enhanced, the configuration is invalid,
/// the page lacks a mandatory element, or a browser call fails during
/// installation.
#[wasm_bindgen]
pub fn enhance(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => PageConfig::from_json(&json)?,
        None => PageConfig::default(),
    };
    Ok(run(config)?)
}

/// Install now if the DOM is parsed, otherwise on `DOMContentLoaded`.
fn run(config: PageConfig) -> Result<(), EnhanceError> {
    INSTALLED.with(InstallGuard::claim)?;
    log::set_max_level(config.level().to_level_filter());
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() != "loading" {
        return Enhancer::new(config)?.install();
    }
    dom::listen_once(&document, "DOMContentLoaded", move |_ev: Event| {
        let installed = Enhancer::new(config).and_then(|enhancer| enhancer.install());
        if let Err(err) = installed {
            log::error!("enhance: {err}");
        }
    })
}
