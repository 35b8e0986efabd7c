use super::*;

#[test]
fn format_offset_uses_two_decimals() {
    assert_eq!(format_offset(0.0), "0.00");
    assert_eq!(format_offset(12.3456), "12.35");
    assert_eq!(format_offset(480.5), "480.50");
}

#[test]
fn format_offset_rounds_halves_up_like_to_fixed() {
    assert_eq!(format_offset(0.625), "0.63");
    assert_eq!(format_offset(1.125), "1.13");
    assert_eq!(format_offset(0.125), "0.13");
}

#[test]
fn format_offset_never_negative_zero() {
    assert_eq!(format_offset(-0.0), "0.00");
    assert_eq!(format_offset(-0.001), "0.00");
}

#[test]
fn first_scroll_requests_a_frame() {
    let mut mirror = ScrollMirror::new();
    assert!(mirror.on_scroll());
}

#[test]
fn burst_within_a_frame_requests_exactly_once() {
    let mut mirror = ScrollMirror::new();
    let requests = (0..25).filter(|_| mirror.on_scroll()).count();
    assert_eq!(requests, 1);
}

#[test]
fn frame_writes_offset_seen_at_frame_time() {
    let mut mirror = ScrollMirror::new();
    for _ in 0..10 {
        mirror.on_scroll();
    }
    // The offsets seen by the coalesced events are irrelevant; the frame
    // reads the final one.
    assert_eq!(mirror.on_frame(733.0), "733.00");
    assert!(mirror.on_scroll());
}

#[test]
fn one_request_per_frame_across_frames() {
    let mut mirror = ScrollMirror::new();
    let mut requests = 0;
    for frame in 0..4 {
        for _ in 0..8 {
            if mirror.on_scroll() {
                requests += 1;
            }
        }
        mirror.on_frame(f64::from(frame) * 100.0);
    }
    assert_eq!(requests, 4);
}

#[test]
fn initial_update_without_scroll() {
    let mut mirror = ScrollMirror::new();
    assert_eq!(mirror.on_frame(0.0), "0.00");
    assert!(mirror.on_scroll());
}

#[test]
fn cancel_releases_guard() {
    let mut mirror = ScrollMirror::new();
    assert!(mirror.on_scroll());
    assert!(!mirror.on_scroll());
    mirror.cancel();
    assert!(mirror.on_scroll());
}
