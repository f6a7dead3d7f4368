use super::*;

fn guard_with(token: Option<&str>) -> NavigationGuard {
    let session = Session::in_memory();
    if let Some(token) = token {
        session.login(token);
    }
    NavigationGuard::new(session)
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn unguarded_route_proceeds_without_token() {
    assert_eq!(guard_with(None).check("/login", None), Navigation::Proceed);
}

#[test]
fn unguarded_route_proceeds_with_token() {
    assert_eq!(guard_with(Some("abc123")).check("/login", Some("/")), Navigation::Proceed);
}

#[test]
fn guarded_route_proceeds_with_token() {
    assert_eq!(guard_with(Some("abc123")).check("/friends", None), Navigation::Proceed);
}

#[test]
fn guarded_route_redirects_without_token() {
    assert_eq!(
        guard_with(None).check("/friends", Some("/login")),
        Navigation::Redirect(AppRoute::Login)
    );
}

#[test]
fn every_guarded_route_redirects_without_token() {
    let guard = guard_with(None);
    for path in ["/", "/server/3", "/friends", "/add-friend", "/profile", "/messages/8", "/add-server"] {
        assert_eq!(guard.resolve(path, None), "/login", "{path}");
    }
}

#[test]
fn unknown_path_is_not_guarded() {
    assert_eq!(guard_with(None).check("/does-not-exist", None), Navigation::Proceed);
}

// =============================================================
// Session changes
// =============================================================

#[test]
fn guard_sees_login_and_logout_immediately() {
    let session = Session::in_memory();
    let guard = NavigationGuard::new(session.clone());

    assert_eq!(guard.resolve("/profile", None), "/login");
    session.login("abc123");
    assert_eq!(guard.resolve("/profile", None), "/profile");
    session.logout();
    assert_eq!(guard.resolve("/profile", Some("/")), "/login");
}

#[test]
fn redirect_discards_original_destination() {
    let guard = guard_with(None);
    let resolved = guard.resolve("/messages/42", Some("/"));
    assert_eq!(resolved, "/login");
    assert!(!resolved.contains("messages"));
}

// =============================================================
// Route outlet
// =============================================================

#[test]
fn outlet_redirects_guarded_page_before_render() {
    let guard = guard_with(None);
    for path in ["/", "/server/3", "/friends", "/add-friend", "/profile", "/messages/8", "/add-server"] {
        assert_eq!(guard.outlet(path, None), RouteOutlet::Redirect("/login".to_owned()), "{path}");
    }
}

#[test]
fn outlet_renders_guarded_page_with_token() {
    let guard = guard_with(Some("abc123"));
    assert_eq!(guard.outlet("/friends", Some("/login")), RouteOutlet::Render(Some(AppRoute::Friends)));
    assert_eq!(
        guard.outlet("/server/3", None),
        RouteOutlet::Render(Some(AppRoute::Server { id: "3".to_owned() }))
    );
}

#[test]
fn outlet_renders_login_without_token() {
    assert_eq!(guard_with(None).outlet("/login", Some("/")), RouteOutlet::Render(Some(AppRoute::Login)));
}

#[test]
fn outlet_renders_unknown_path_as_unmatched() {
    assert_eq!(guard_with(None).outlet("/nowhere", None), RouteOutlet::Render(None));
}

#[test]
fn outlet_follows_session_changes() {
    let session = Session::in_memory();
    let guard = NavigationGuard::new(session.clone());

    session.login("abc123");
    assert_eq!(guard.outlet("/profile", None), RouteOutlet::Render(Some(AppRoute::Profile)));
    session.logout();
    assert_eq!(guard.outlet("/profile", Some("/")), RouteOutlet::Redirect("/login".to_owned()));
}

#[test]
fn redirect_replaces_history_entry() {
    assert!(redirect_options().replace);
}
