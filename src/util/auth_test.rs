use super::*;

fn signed_in() -> AuthState {
    AuthState {
        token: Some("tok".to_owned()),
        username: Some("alice".to_owned()),
        profile: None,
        loading: false,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_token_missing() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { loading: true, ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_token_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn unauthorized_error_clears_token_and_username() {
    let mut state = signed_in();
    assert!(apply_api_error(&mut state, &ApiError::Unauthorized));
    assert!(state.token.is_none());
    assert!(state.username.is_none());
    assert!(should_redirect_unauth(&state));
}

#[test]
fn other_errors_keep_session() {
    let mut state = signed_in();
    assert!(!apply_api_error(&mut state, &ApiError::Network("offline".to_owned())));
    assert!(!apply_api_error(&mut state, &ApiError::Rejected { status: 500, detail: None }));
    assert_eq!(state, signed_in());
}
