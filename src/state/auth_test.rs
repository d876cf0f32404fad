use super::*;

#[test]
fn default_state_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.token(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn restore_without_browser_storage_is_signed_out() {
    let state = AuthState::restore();
    assert_eq!(state, AuthState::default());
}

#[test]
fn sign_in_sets_token_and_username() {
    let mut state = AuthState { loading: true, ..AuthState::default() };
    state.sign_in("tok".to_owned(), "alice".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("tok"));
    assert_eq!(state.username.as_deref(), Some("alice"));
    assert!(!state.loading);
}

#[test]
fn verified_prefers_server_username() {
    let mut state = AuthState { token: Some("tok".to_owned()), loading: true, ..AuthState::default() };
    state.verified(Profile { username: "alice".to_owned() });
    assert_eq!(state.username.as_deref(), Some("alice"));
    assert!(state.profile.is_some());
    assert!(!state.loading);
}

#[test]
fn clear_drops_token_username_and_profile() {
    let mut state = AuthState::default();
    state.sign_in("tok".to_owned(), "alice".to_owned());
    state.verified(Profile { username: "alice".to_owned() });
    state.clear();
    assert_eq!(state, AuthState::default());
}

#[test]
fn rejected_verification_clears_session() {
    let mut state = AuthState { token: Some("old".to_owned()), username: Some("bob".to_owned()), loading: true, profile: None };
    state.apply_verification(Err(ApiError::Unauthorized));
    assert_eq!(state, AuthState::default());
}

#[test]
fn network_failure_during_verification_keeps_token() {
    let mut state = AuthState { token: Some("old".to_owned()), loading: true, ..AuthState::default() };
    state.apply_verification(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.token(), Some("old"));
    assert!(!state.loading);
}
