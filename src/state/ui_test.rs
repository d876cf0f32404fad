use super::*;

#[test]
fn ui_state_default_opens_code_runner() {
    let state = UiState::default();
    assert_eq!(state.section, Section::CodeRunner);
    assert_eq!(state.backend, BackendStatus::Unknown);
}

#[test]
fn sections_have_distinct_labels() {
    let labels: std::collections::HashSet<_> = Section::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels.len(), Section::ALL.len());
}

#[test]
fn backend_status_from_probe() {
    assert_eq!(BackendStatus::from_probe(true), BackendStatus::Online);
    assert_eq!(BackendStatus::from_probe(false), BackendStatus::Offline);
}
