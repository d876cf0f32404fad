use super::*;

#[test]
fn saved_label_flips_to_confirmation() {
    assert_eq!(saved_label(false), "Save Settings");
    assert_eq!(saved_label(true), "✓ Saved!");
}
