use super::*;
use crate::net::types::SessionUser;

fn signed_in() -> AuthState {
    AuthState { user: Some(SessionUser { email: "a@b.com".to_owned() }) }
}

#[test]
fn should_redirect_unauth_when_user_missing() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn redirect_flips_after_sign_out() {
    let mut state = signed_in();
    assert!(!should_redirect_unauth(&state));
    state.sign_out();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn signed_in_redirect_only_with_user() {
    assert!(should_redirect_signed_in(&signed_in()));
    assert!(!should_redirect_signed_in(&AuthState::default()));
}
