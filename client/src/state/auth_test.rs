use super::*;

// =============================================================
// AuthState default
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn sign_in_records_user() {
    let mut state = AuthState::default();
    state.sign_in(SessionUser { email: "a@b.com".to_owned() });
    assert!(state.is_signed_in());
    assert_eq!(state.user.map(|u| u.email).as_deref(), Some("a@b.com"));
}

#[test]
fn sign_out_clears_user() {
    let mut state = AuthState::default();
    state.sign_in(SessionUser { email: "a@b.com".to_owned() });
    state.sign_out();
    assert!(!state.is_signed_in());
}
