//! Generated placeholder for an avatar image that failed to load.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. The placeholder is drawn into a
//! detached canvas (never attached to the page) and handed back as a PNG data
//! URI, so no further request is made.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::config::AvatarStyle;
use crate::error::EnhanceError;

/// Load state of the avatar image, as far as the enhancer knows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarState {
    /// Original source, not (yet) failed.
    #[default]
    Original,
    /// The generated placeholder has been assigned.
    FallbackApplied,
}

/// Resolved drawing parameters for the placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackLayout {
    pub size: u32,
    pub background: String,
    pub foreground: String,
    pub initials: String,
    /// CSS font shorthand.
    pub font: String,
    pub text_x: f64,
    pub text_y: f64,
}

impl FallbackLayout {
    #[must_use]
    pub fn from_style(style: &AvatarStyle) -> Self {
        let half = f64::from(style.size_px) / 2.0;
        Self {
            size: style.size_px,
            background: style.background.clone(),
            foreground: style.foreground.clone(),
            initials: style.initials.clone(),
            font: format!("bold {}px sans-serif", style.font_px),
            text_x: half,
            text_y: half + style.baseline_offset_px,
        }
    }
}

/// True for an image that finished loading without decoding anything: its
/// `error` event has already fired and will not fire again.
#[must_use]
pub fn already_failed(complete: bool, natural_width: u32, src: &str) -> bool {
    complete && natural_width == 0 && !src.is_empty()
}

/// Draw the placeholder offscreen and encode it as a data URI.
///
/// # Errors
///
/// Returns `Err` if the canvas cannot be created, has no 2D context, or a
/// `Canvas2D` call fails.
pub fn render_data_uri(document: &Document, layout: &FallbackLayout) -> Result<String, EnhanceError> {
    let canvas = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>().map_err(JsValue::from)?;
    canvas.set_width(layout.size);
    canvas.set_height(layout.size);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| EnhanceError::Js("2d context unavailable".to_owned()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)?;

    let size = f64::from(layout.size);
    ctx.set_fill_style_str(&layout.background);
    ctx.fill_rect(0.0, 0.0, size, size);

    ctx.set_font(&layout.font);
    ctx.set_fill_style_str(&layout.foreground);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&layout.initials, layout.text_x, layout.text_y)?;

    Ok(canvas.to_data_url()?)
}
