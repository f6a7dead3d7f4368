use super::*;

fn all_routes() -> Vec<AppRoute> {
    vec![
        AppRoute::Login,
        AppRoute::Home,
        AppRoute::Server { id: "12".to_owned() },
        AppRoute::Friends,
        AppRoute::AddFriend,
        AppRoute::Profile,
        AppRoute::DirectMessage { id: "c-9".to_owned() },
        AppRoute::AddServer,
    ]
}

#[test]
fn every_route_parses_back_from_its_path() {
    for route in all_routes() {
        assert_eq!(AppRoute::parse(&route.path()), Some(route.clone()), "{}", route.name());
    }
}

#[test]
fn only_login_is_unguarded() {
    let unguarded: Vec<&str> = all_routes()
        .iter()
        .filter(|r| !r.requires_auth())
        .map(AppRoute::name)
        .collect();
    assert_eq!(unguarded, vec!["login"]);
}

#[test]
fn parse_ignores_trailing_slash_query_and_fragment() {
    assert_eq!(AppRoute::parse("/friends/"), Some(AppRoute::Friends));
    assert_eq!(AppRoute::parse("/friends?tab=online"), Some(AppRoute::Friends));
    assert_eq!(AppRoute::parse("/profile#avatar"), Some(AppRoute::Profile));
    assert_eq!(AppRoute::parse(""), Some(AppRoute::Home));
}

#[test]
fn parse_extracts_ids() {
    assert_eq!(AppRoute::parse("/server/42"), Some(AppRoute::Server { id: "42".to_owned() }));
    assert_eq!(
        AppRoute::parse("/messages/abc"),
        Some(AppRoute::DirectMessage { id: "abc".to_owned() })
    );
}

#[test]
fn parse_rejects_unknown_and_incomplete_paths() {
    assert_eq!(AppRoute::parse("/server"), None);
    assert_eq!(AppRoute::parse("/server/1/settings"), None);
    assert_eq!(AppRoute::parse("/nowhere"), None);
}

#[test]
fn names_match_route_table() {
    let names: Vec<&str> = all_routes().iter().map(AppRoute::name).collect();
    assert_eq!(
        names,
        vec!["login", "home", "server", "friends", "add-friend", "profile", "direct-message", "add-server"]
    );
}
