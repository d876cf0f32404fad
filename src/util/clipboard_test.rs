use super::*;

#[test]
fn clear_copied_resets_matching_id() {
    let mut current = Some("site-3".to_owned());
    clear_copied_if_current(&mut current, "site-3");
    assert!(current.is_none());
}

#[test]
fn clear_copied_keeps_newer_id() {
    let mut current = Some("site-4".to_owned());
    clear_copied_if_current(&mut current, "site-3");
    assert_eq!(current.as_deref(), Some("site-4"));
}

#[test]
fn copied_marker_lasts_two_seconds() {
    assert_eq!(COPIED_RESET_MS, 2000);
}
