//! Route-guard helpers shared by protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: unauthenticated
//! visitors go to `/login`, authenticated visitors of the wrong role go to
//! their own home route.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Home route for a role, used after login and by wrong-role redirects.
#[must_use]
pub fn role_home(role: Role) -> &'static str {
    match role {
        Role::Buyer => "/",
        Role::Seller => "/seller",
        Role::Admin => "/admin",
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect away whenever auth has loaded and the user's role differs from
/// `required`: unauthenticated visitors go to `/login`, other roles to their
/// own home route.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        match &state.user {
            None => navigate("/login", NavigateOptions::default()),
            Some(user) if user.role != required => {
                navigate(role_home(user.role), NavigateOptions::default());
            }
            Some(_) => {}
        }
    });
}
