use super::*;

#[test]
fn state_default_is_original() {
    assert_eq!(AvatarState::default(), AvatarState::Original);
}

#[test]
fn layout_centers_initials_with_baseline_offset() {
    let layout = FallbackLayout::from_style(&AvatarStyle::default());
    assert_eq!(layout.size, 240);
    assert_eq!(layout.text_x, 120.0);
    assert_eq!(layout.text_y, 130.0);
}

#[test]
fn layout_font_is_bold_sans() {
    let layout = FallbackLayout::from_style(&AvatarStyle::default());
    assert_eq!(layout.font, "bold 96px sans-serif");
}

#[test]
fn layout_carries_preset_colors_and_initials() {
    let layout = FallbackLayout::from_style(&AvatarStyle::default());
    assert_eq!(layout.background, "#1c1f23");
    assert_eq!(layout.foreground, "#c16b4a");
    assert_eq!(layout.initials, "FB");
}

#[test]
fn layout_follows_custom_size() {
    let style = AvatarStyle { size_px: 100, baseline_offset_px: 0.0, ..AvatarStyle::default() };
    let layout = FallbackLayout::from_style(&style);
    assert_eq!((layout.text_x, layout.text_y), (50.0, 50.0));
}

#[test]
fn already_failed_needs_complete_empty_image_with_source() {
    assert!(already_failed(true, 0, "/img/avatar.jpg"));
}

#[test]
fn already_failed_ignores_loaded_or_pending_images() {
    assert!(!already_failed(true, 480, "/img/avatar.jpg"));
    assert!(!already_failed(false, 0, "/img/avatar.jpg"));
}

#[test]
fn already_failed_ignores_image_without_source() {
    assert!(!already_failed(true, 0, ""));
}

#[test]
fn already_failed_accepts_broken_inline_png() {
    assert!(already_failed(true, 0, "data:image/png;base64,broken"));
}
