use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::anchor::{self, AnchorClick};
use crate::avatar::{self, AvatarState, FallbackLayout};
use crate::config::PageConfig;
use crate::consts::{
    ANCHOR_SELECTOR, AVATAR_CARD_ID, AVATAR_IMAGE_ID, NAV_LINKS_SELECTOR, NAV_TOGGLE_SELECTOR, SKILL_BAR_SELECTOR,
    SKILL_WIDTH_DATA_KEY, THEME_ATTRIBUTE, THEME_TOGGLE_ID, YEAR_ID,
};
use crate::dom::{self, LocalStorage};
use crate::error::EnhanceError;
use crate::nav;
use crate::scroll::ScrollMirror;
use crate::skills::{self, RevealPlan};
use crate::theme::{PreferenceStore, Theme, ThemeController};
use crate::tilt::{self, Point, Rect};

#[cfg(test)]
#[path = "enhancer_test.rs"]
mod enhancer_test;

/// Refuses a second installation on the same page; duplicate listeners
/// would run every toggle twice.
#[derive(Debug, Default)]
pub struct InstallGuard {
    installed: Cell<bool>,
}

impl InstallGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self { installed: Cell::new(false) }
    }

    /// Mark the page as enhanced.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::AlreadyInstalled`] on every call after the first.
    pub fn claim(&self) -> Result<(), EnhanceError> {
        if self.installed.replace(true) {
            return Err(EnhanceError::AlreadyInstalled);
        }
        Ok(())
    }
}

/// Theme plus the glyph the toggle control should show for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeView {
    pub theme: Theme,
    pub glyph: String,
}

/// Inline style changes for one nav drawer activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavUpdate {
    pub display: &'static str,
    pub declarations: Vec<(&'static str, String)>,
}

/// Core page state: every decision that does not need the DOM.
///
/// Separated from `Enhancer` so it can be tested without WASM/browser dependencies.
pub struct EnhancerCore {
    pub config: PageConfig,
    pub theme: ThemeController,
    pub scroll: ScrollMirror,
    pub avatar: AvatarState,
}

impl Default for EnhancerCore {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

impl EnhancerCore {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        let theme = ThemeController::new(config.storage_key.clone());
        Self { config, theme, scroll: ScrollMirror::new(), avatar: AvatarState::default() }
    }

    // --- Theme ---

    /// Resolve the theme at load from storage and the OS preference.
    pub fn init_theme(&mut self, store: &impl PreferenceStore, prefers_dark: bool) -> ThemeView {
        let theme = self.theme.init(store, prefers_dark);
        self.theme_view(theme)
    }

    /// Toggle control activated.
    pub fn on_theme_toggle(&mut self, store: &mut impl PreferenceStore) -> ThemeView {
        let theme = self.theme.toggle(store);
        self.theme_view(theme)
    }

    fn theme_view(&self, theme: Theme) -> ThemeView {
        let glyph = match theme {
            Theme::Dark => self.config.dark_glyph.clone(),
            Theme::Light => self.config.light_glyph.clone(),
        };
        ThemeView { theme, glyph }
    }

    // --- Tilt ---

    /// Pointer moved over the card; returns the inline transform.
    #[must_use]
    pub fn on_card_move(&self, pointer: Point, card: Rect) -> String {
        let tilt = tilt::tilt_for(pointer, card, self.config.tilt_max_deg);
        tilt::transform_css(tilt, self.config.tilt_perspective_px, self.config.tilt_lift_px)
    }

    /// Pointer left the card; the transform goes back to unset.
    #[must_use]
    pub fn on_card_leave(&self) -> &'static str {
        ""
    }

    // --- Nav ---

    #[must_use]
    pub fn on_nav_toggle(&self, current_display: &str) -> NavUpdate {
        NavUpdate {
            display: nav::next_display(current_display),
            declarations: nav::drawer_declarations(&self.config.nav),
        }
    }

    // --- Skill bars ---

    #[must_use]
    pub fn on_skill_bar_visible(
        &self,
        is_intersecting: bool,
        remembered: Option<&str>,
        inline_width: &str,
    ) -> Option<RevealPlan> {
        skills::plan_reveal(
            is_intersecting,
            remembered,
            inline_width,
            self.config.skill_delay_ms,
            self.config.skill_bars_once,
        )
    }

    // --- Avatar ---

    /// Avatar failed to load. Returns the placeholder layout the first time
    /// only; the placeholder itself is never replaced.
    pub fn on_avatar_error(&mut self) -> Option<FallbackLayout> {
        match self.avatar {
            AvatarState::FallbackApplied => None,
            AvatarState::Original => {
                self.avatar = AvatarState::FallbackApplied;
                Some(FallbackLayout::from_style(&self.config.avatar))
            }
        }
    }

    /// Checked once at install: an image that failed before the listener was
    /// attached gets the placeholder now.
    pub fn on_avatar_installed(&mut self, complete: bool, natural_width: u32, src: &str) -> Option<FallbackLayout> {
        if !avatar::already_failed(complete, natural_width, src) {
            return None;
        }
        self.on_avatar_error()
    }

    // --- Anchors ---

    pub fn on_anchor_click<T>(&self, href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> AnchorClick<T> {
        anchor::resolve_click(href, lookup)
    }

    // --- Scroll ---

    /// Returns `true` when an animation frame must be requested.
    pub fn on_scroll(&mut self) -> bool {
        self.scroll.on_scroll()
    }

    /// Frame callback; returns the custom property name and value to write.
    pub fn on_frame(&mut self, scroll_y: f64) -> (String, String) {
        (self.config.scroll_var.clone(), self.scroll.on_frame(scroll_y))
    }
}

/// The page enhancer. Wraps `EnhancerCore` and owns the browser handles.
pub struct Enhancer {
    window: Window,
    document: Document,
    root: HtmlElement,
    core: Rc<RefCell<EnhancerCore>>,
}

impl Enhancer {
    /// Bind to the current window and document.
    ///
    /// # Errors
    ///
    /// Returns `Err` outside a browser or when the document has no root.
    pub fn new(config: PageConfig) -> Result<Self, EnhanceError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let root = dom::root_element(&document)?;
        Ok(Self { window, document, root, core: Rc::new(RefCell::new(EnhancerCore::new(config))) })
    }

    /// Attach every enhancement, in page order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a mandatory element (`#year`, `#avatarCard`) is missing
    /// or a browser call fails; later features are not installed then.
    pub fn install(&self) -> Result<(), EnhanceError> {
        self.stamp_year()?;
        self.install_theme()?;
        self.install_tilt()?;
        self.install_nav_toggle()?;
        self.install_skill_bars()?;
        self.install_avatar_fallback()?;
        self.install_anchor_scroll()?;
        self.install_scroll_mirror()?;
        log::info!("enhance: page enhancements installed");
        Ok(())
    }

    fn stamp_year(&self) -> Result<(), EnhanceError> {
        let year = js_sys::Date::new_0().get_full_year();
        dom::required_by_id(&self.document, YEAR_ID)?.set_text_content(Some(&year.to_string()));
        Ok(())
    }

    fn install_theme(&self) -> Result<(), EnhanceError> {
        let toggle = dom::optional_by_id(&self.document, THEME_TOGGLE_ID);
        let mut store = LocalStorage::open(&self.window);
        let view = self.core.borrow_mut().init_theme(&store, dom::prefers_dark(&self.window));
        apply_theme(&self.root, toggle.as_ref(), &view)?;
        log::debug!("theme: initial {}", view.theme.as_str());

        let Some(toggle) = toggle else {
            return Ok(());
        };
        let core = Rc::clone(&self.core);
        let root = self.root.clone();
        let target = toggle.clone();
        dom::listen(&target, "click", move |_ev: Event| {
            let view = core.borrow_mut().on_theme_toggle(&mut store);
            if let Err(err) = apply_theme(&root, Some(&toggle), &view) {
                log::warn!("theme: apply failed: {err}");
            }
        })
    }

    fn install_tilt(&self) -> Result<(), EnhanceError> {
        let card = dom::into_html(dom::required_by_id(&self.document, AVATAR_CARD_ID)?)?;

        let core = Rc::clone(&self.core);
        let moving = card.clone();
        dom::listen(&card, "mousemove", move |ev: Event| {
            let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
                return;
            };
            let bounds = moving.get_bounding_client_rect();
            let rect = Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
            let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let transform = core.borrow().on_card_move(pointer, rect);
            if let Err(err) = moving.style().set_property("transform", &transform) {
                log::warn!("tilt: {}", EnhanceError::from(err));
            }
        })?;

        let core = Rc::clone(&self.core);
        let leaving = card.clone();
        dom::listen(&card, "mouseleave", move |_ev: Event| {
            let reset = core.borrow().on_card_leave();
            if let Err(err) = leaving.style().set_property("transform", reset) {
                log::warn!("tilt: {}", EnhanceError::from(err));
            }
        })
    }

    fn install_nav_toggle(&self) -> Result<(), EnhanceError> {
        let Some(toggle) = dom::optional_query(&self.document, NAV_TOGGLE_SELECTOR)? else {
            return Ok(());
        };
        let core = Rc::clone(&self.core);
        let document = self.document.clone();
        dom::listen(&toggle, "click", move |_ev: Event| {
            if let Err(err) = toggle_nav(&document, &core.borrow()) {
                log::warn!("nav: {err}");
            }
        })
    }

    fn install_skill_bars(&self) -> Result<(), EnhanceError> {
        let bars = dom::query_all(&self.document, SKILL_BAR_SELECTOR)?;
        if bars.is_empty() {
            return Ok(());
        }

        let core = Rc::clone(&self.core);
        let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if let Err(err) = reveal_bar(&core.borrow(), &entry, &observer) {
                    log::warn!("skills: {err}");
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.core.borrow().config.skill_threshold));
        let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
        cb.forget();

        for bar in &bars {
            observer.observe(bar);
        }
        log::debug!("skills: observing {} bars", bars.len());
        Ok(())
    }

    fn install_avatar_fallback(&self) -> Result<(), EnhanceError> {
        let Some(image) = dom::optional_by_id(&self.document, AVATAR_IMAGE_ID) else {
            return Ok(());
        };
        let core = Rc::clone(&self.core);
        let document = self.document.clone();
        let target = image.clone();
        dom::listen(&target, "error", move |_ev: Event| {
            let layout = core.borrow_mut().on_avatar_error();
            if let Err(err) = apply_avatar_fallback(&document, &image, layout) {
                log::warn!("avatar: fallback not applied: {err}");
            }
        })?;

        // The module usually starts after parsing, when an early failure has
        // already fired its only `error` event.
        if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
            let layout = self.core.borrow_mut().on_avatar_installed(img.complete(), img.natural_width(), &img.src());
            if let Err(err) = apply_avatar_fallback(&self.document, &target, layout) {
                log::warn!("avatar: fallback not applied: {err}");
            }
        }
        Ok(())
    }

    fn install_anchor_scroll(&self) -> Result<(), EnhanceError> {
        let links = dom::query_all(&self.document, ANCHOR_SELECTOR)?;
        for link in links {
            let core = Rc::clone(&self.core);
            let document = self.document.clone();
            let target = link.clone();
            dom::listen(&target, "click", move |ev: Event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let outcome = core.borrow().on_anchor_click(&href, |id| document.get_element_by_id(id));
                if let AnchorClick::ScrollTo(el) = outcome {
                    ev.prevent_default();
                    smooth_scroll_to(&el);
                }
            })?;
        }
        Ok(())
    }

    fn install_scroll_mirror(&self) -> Result<(), EnhanceError> {
        mirror_scroll(&self.window, &self.root, &self.core)?;

        let core = Rc::clone(&self.core);
        let window = self.window.clone();
        let root = self.root.clone();
        let frame = Closure::wrap(Box::new(move |_ts: f64| {
            if let Err(err) = mirror_scroll(&window, &root, &core) {
                log::warn!("scroll: {err}");
            }
        }) as Box<dyn FnMut(f64)>);
        let frame_fn = frame.as_ref().unchecked_ref::<js_sys::Function>().clone();
        frame.forget();

        let core = Rc::clone(&self.core);
        let window = self.window.clone();
        let root = self.root.clone();
        dom::listen_passive(&self.window, "scroll", move |_ev: Event| {
            if !core.borrow_mut().on_scroll() {
                return;
            }
            if let Err(err) = window.request_animation_frame(&frame_fn) {
                log::warn!("scroll: frame request failed: {}", EnhanceError::from(err));
                core.borrow_mut().scroll.cancel();
                if let Err(err) = mirror_scroll(&window, &root, &core) {
                    log::warn!("scroll: {err}");
                }
            }
        })
    }
}

fn apply_theme(root: &HtmlElement, toggle: Option<&Element>, view: &ThemeView) -> Result<(), EnhanceError> {
    root.set_attribute(THEME_ATTRIBUTE, view.theme.as_str())?;
    if let Some(toggle) = toggle {
        toggle.set_text_content(Some(&view.glyph));
    }
    Ok(())
}

fn toggle_nav(document: &Document, core: &EnhancerCore) -> Result<(), EnhanceError> {
    let Some(links) = dom::optional_query(document, NAV_LINKS_SELECTOR)? else {
        return Ok(());
    };
    let style = dom::into_html(links)?.style();
    let update = core.on_nav_toggle(&style.get_property_value("display")?);
    style.set_property("display", update.display)?;
    for (name, value) in &update.declarations {
        style.set_property(name, value)?;
    }
    Ok(())
}

fn reveal_bar(
    core: &EnhancerCore,
    entry: &IntersectionObserverEntry,
    observer: &IntersectionObserver,
) -> Result<(), EnhanceError> {
    let bar = dom::into_html(entry.target())?;
    let dataset = bar.dataset();
    let remembered = dataset.get(SKILL_WIDTH_DATA_KEY);
    let style = bar.style();
    let inline = style.get_property_value("width")?;
    let Some(plan) = core.on_skill_bar_visible(entry.is_intersecting(), remembered.as_deref(), &inline) else {
        return Ok(());
    };

    if plan.remember {
        dataset.set(SKILL_WIDTH_DATA_KEY, &plan.target_width)?;
    }
    if plan.unobserve {
        observer.unobserve(&bar);
    }
    for step in plan.steps() {
        if step.after_ms == 0 {
            style.set_property("width", &step.width)?;
            continue;
        }
        let bar = bar.clone();
        Timeout::new(step.after_ms, move || {
            if let Err(err) = bar.style().set_property("width", &step.width) {
                log::warn!("skills: restore failed: {}", EnhanceError::from(err));
            }
        })
        .forget();
    }
    Ok(())
}

fn apply_avatar_fallback(
    document: &Document,
    image: &Element,
    layout: Option<FallbackLayout>,
) -> Result<(), EnhanceError> {
    let Some(layout) = layout else {
        return Ok(());
    };
    let uri = avatar::render_data_uri(document, &layout)?;
    match image.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.set_src(&uri),
        None => image.set_attribute("src", &uri)?,
    }
    log::info!("avatar: image failed to load, using generated placeholder");
    Ok(())
}

fn smooth_scroll_to(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

fn mirror_scroll(window: &Window, root: &HtmlElement, core: &RefCell<EnhancerCore>) -> Result<(), EnhanceError> {
    let scroll_y = window.scroll_y()?;
    let (name, value) = core.borrow_mut().on_frame(scroll_y);
    root.style().set_property(&name, &value)?;
    Ok(())
}
