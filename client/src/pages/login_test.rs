use super::*;

#[test]
fn signed_in_user_prefers_reported_identity() {
    let reported = SessionUser { email: "canonical@example.com".to_owned() };
    assert_eq!(signed_in_user(Some(reported.clone()), "Typed@Example.com"), reported);
}

#[test]
fn signed_in_user_falls_back_to_submitted_email() {
    assert_eq!(
        signed_in_user(None, "typed@example.com"),
        SessionUser { email: "typed@example.com".to_owned() }
    );
}
