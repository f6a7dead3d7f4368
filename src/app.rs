//! Root application component with routing, guarded route outlet, and
//! context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::routes::AppRoute;
use crate::state::servers::ServerStore;
use crate::state::session::Session;
use crate::util::auth::{NavigationGuard, RouteOutlet, redirect_options};

/// Root application component.
///
/// Provides the session and server store to all child components and sets
/// up client-side routing behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        leptos::logging::error!("{e}; falling back to default API base URL");
        ClientConfig::default()
    });
    let session = Session::for_target(&config.token_key);
    provide_context(session.clone());
    provide_context(NavigationGuard::new(session.clone()));

    match ApiClient::for_target(&config, session) {
        Ok(client) => provide_context(ServerStore::new(client)),
        Err(e) => leptos::logging::error!("API client unavailable: {e}"),
    }

    view! {
        <Title text="Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=RouteView/>
                <Route path=StaticSegment("") view=RouteView/>
                <Route path=(StaticSegment("server"), ParamSegment("id")) view=RouteView/>
                <Route path=StaticSegment("friends") view=RouteView/>
                <Route path=StaticSegment("add-friend") view=RouteView/>
                <Route path=StaticSegment("profile") view=RouteView/>
                <Route path=(StaticSegment("messages"), ParamSegment("id")) view=RouteView/>
                <Route path=StaticSegment("add-server") view=RouteView/>
            </Routes>
        </Router>
    }
}

/// Outlet for a matched route. The guard decides before anything mounts:
/// guarded pages without a session render a redirect to `/login` instead.
/// Page content is supplied by the view layer.
#[component]
fn RouteView() -> impl IntoView {
    let guard = expect_context::<NavigationGuard>();
    let location = use_location();

    move || match guard.outlet(&location.pathname.get(), None) {
        RouteOutlet::Render(route) => {
            let name = route.map_or("not-found", |route| route.name());
            view! { <main class="route-view" data-route=name></main> }.into_any()
        }
        RouteOutlet::Redirect(path) => view! { <Redirect path=path options=redirect_options()/> }.into_any(),
    }
}
