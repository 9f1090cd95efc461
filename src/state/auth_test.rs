use super::*;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "avery@example.com".to_owned(),
        name: "Avery".to_owned(),
        role,
    }
}

// =============================================================
// lifecycle states
// =============================================================

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn signed_in_resolves_probe_with_user() {
    let state = AuthState::signed_in(user(Role::Seller));
    assert!(!state.loading);
    assert_eq!(state.role(), Some(Role::Seller));
}

#[test]
fn signed_out_resolves_probe_without_user() {
    let state = AuthState::signed_out();
    assert!(!state.loading);
    assert!(state.user.is_none());
}

// =============================================================
// role predicates
// =============================================================

#[test]
fn role_is_none_when_signed_out() {
    assert_eq!(AuthState::signed_out().role(), None);
}

#[test]
fn has_role_matches_exact_role_only() {
    let state = AuthState::signed_in(user(Role::Admin));
    assert!(state.has_role(Role::Admin));
    assert!(!state.has_role(Role::Buyer));
    assert!(!state.has_role(Role::Seller));
}

#[test]
fn has_role_is_false_when_signed_out() {
    assert!(!AuthState::signed_out().has_role(Role::Buyer));
}
