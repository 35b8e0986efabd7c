use super::*;

fn widths(plan: &RevealPlan) -> Vec<(u32, String)> {
    plan.steps().into_iter().map(|step| (step.after_ms, step.width)).collect()
}

#[test]
fn non_intersecting_entry_does_nothing() {
    assert_eq!(plan_reveal(false, None, "72%", 200, false), None);
}

#[test]
fn first_reveal_collapses_now_and_restores_after_delay() {
    let plan = plan_reveal(true, None, "72%", 200, false).unwrap();
    assert_eq!(widths(&plan), vec![(0, "0%".to_owned()), (200, "72%".to_owned())]);
    assert!(plan.remember);
    assert!(!plan.unobserve);
}

#[test]
fn later_reveal_uses_remembered_width() {
    // Re-entry inside the delay window sees the collapsed inline width.
    let plan = plan_reveal(true, Some("72%"), "0%", 200, false).unwrap();
    assert_eq!(plan.target_width, "72%");
    assert_eq!(widths(&plan)[1], (200, "72%".to_owned()));
    assert!(!plan.remember);
}

#[test]
fn reveals_repeat_by_default() {
    let first = plan_reveal(true, None, "40%", 200, false).unwrap();
    let again = plan_reveal(true, Some(&first.target_width), "40%", 200, false);
    assert!(again.is_some());
    assert!(!first.unobserve);
}

#[test]
fn once_flag_requests_unobserve() {
    let plan = plan_reveal(true, None, "55%", 200, true).unwrap();
    assert!(plan.unobserve);
}

#[test]
fn independent_bars_share_the_same_delay() {
    let a = plan_reveal(true, None, "72%", 200, false).unwrap();
    let b = plan_reveal(true, None, "30%", 200, false).unwrap();
    assert_eq!(widths(&a)[1], (200, "72%".to_owned()));
    assert_eq!(widths(&b)[1], (200, "30%".to_owned()));
}

#[test]
fn zero_delay_keeps_collapse_before_restore() {
    let plan = plan_reveal(true, None, "72%", 0, false).unwrap();
    assert_eq!(widths(&plan), vec![(0, "0%".to_owned()), (0, "72%".to_owned())]);
}

#[test]
fn bar_without_inline_width_restores_empty() {
    let plan = plan_reveal(true, None, "", 200, false).unwrap();
    assert_eq!(widths(&plan)[1], (200, String::new()));
}
