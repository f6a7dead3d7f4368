//! Session-based navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every location change is checked against the route table and the current
//! session. Guarded destinations without a token are replaced by `/login`;
//! the original destination is not remembered.
//!
//! DESIGN
//! ======
//! The route outlet asks [`NavigationGuard::outlet`] while rendering, so a
//! redirect happens instead of mounting the page rather than after it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::routes::AppRoute;
use crate::state::session::Session;

/// Decision for one attempted transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(AppRoute),
}

/// What the route outlet renders for the current location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteOutlet {
    /// Mount the page; `None` for paths outside the route table.
    Render(Option<AppRoute>),
    /// Mount nothing and replace the history entry with this path.
    Redirect(String),
}

#[derive(Clone, Debug)]
pub struct NavigationGuard {
    session: Session,
}

impl NavigationGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Decide whether a transition from `from` to `to` may proceed.
    ///
    /// Paths outside the route table carry no auth requirement.
    #[must_use]
    pub fn check(&self, to: &str, from: Option<&str>) -> Navigation {
        let requires_auth = AppRoute::parse(to).is_some_and(|route| route.requires_auth());
        if requires_auth && !self.session.is_authenticated() {
            leptos::logging::log!("unauthenticated navigation {from:?} -> {to}; redirecting to login");
            return Navigation::Redirect(AppRoute::Login);
        }
        Navigation::Proceed
    }

    /// Path the transition ends up on.
    #[must_use]
    pub fn resolve(&self, to: &str, from: Option<&str>) -> String {
        match self.check(to, from) {
            Navigation::Proceed => to.to_owned(),
            Navigation::Redirect(route) => route.path(),
        }
    }

    /// Render-time form of [`NavigationGuard::check`]. The outlet consults
    /// this before any page content is built, so a guarded page never mounts
    /// for a session without a token.
    #[must_use]
    pub fn outlet(&self, to: &str, from: Option<&str>) -> RouteOutlet {
        match self.check(to, from) {
            Navigation::Proceed => RouteOutlet::Render(AppRoute::parse(to)),
            Navigation::Redirect(route) => RouteOutlet::Redirect(route.path()),
        }
    }
}

/// History options for guard redirects: the rejected entry is replaced.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
