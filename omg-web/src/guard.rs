//! Session guard layout.
//!
//! Evaluated on every navigation: unauthenticated visitors are bounced to
//! the login view carrying the intended destination, and an authenticated
//! session is re-validated against the profile endpoint with one refresh
//! attempt before giving up. All redirects use replace semantics so the
//! history doesn't grow.

use crate::{session, store, Route};
use dioxus::prelude::*;
use tracing::warn;

/// Where to land after leaving the login view.
pub(crate) fn login_redirect_target(from: &str) -> Route {
    if from.is_empty() {
        return Route::Playlists {};
    }
    from.parse::<Route>().unwrap_or(Route::Playlists {})
}

#[component]
pub fn AuthGuard() -> Element {
    let route = use_route::<Route>();
    let nav = navigator();

    use_effect(use_reactive((&route,), move |(route,)| {
        let on_login = matches!(route, Route::Login { .. });
        let authenticated = session::is_authenticated();

        if !authenticated && !on_login {
            nav.replace(Route::Login {
                from: route.to_string(),
            });
            return;
        }

        if authenticated && on_login {
            if let Route::Login { from } = &route {
                nav.replace(login_redirect_target(from));
            }
            return;
        }

        if authenticated {
            spawn(async move {
                if store::auth::check_auth().await {
                    return;
                }
                warn!("profile validation failed, attempting session refresh");
                if !store::auth::refresh_session().await {
                    nav.replace(Route::Login {
                        from: route.to_string(),
                    });
                }
            });
        }
    }));

    rsx! {
        Outlet::<Route> {}
    }
}
