//! Application route table.
//!
//! Every route except `login` requires an authenticated session. Paths are
//! matched segment by segment; trailing slashes are ignored.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Home,
    Server { id: String },
    Friends,
    AddFriend,
    Profile,
    DirectMessage { id: String },
    AddServer,
}

impl AppRoute {
    /// Match a location path against the route table.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Home),
            ["login"] => Some(Self::Login),
            ["server", id] => Some(Self::Server { id: (*id).to_owned() }),
            ["friends"] => Some(Self::Friends),
            ["add-friend"] => Some(Self::AddFriend),
            ["profile"] => Some(Self::Profile),
            ["messages", id] => Some(Self::DirectMessage { id: (*id).to_owned() }),
            ["add-server"] => Some(Self::AddServer),
            _ => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_owned(),
            Self::Home => "/".to_owned(),
            Self::Server { id } => format!("/server/{id}"),
            Self::Friends => "/friends".to_owned(),
            Self::AddFriend => "/add-friend".to_owned(),
            Self::Profile => "/profile".to_owned(),
            Self::DirectMessage { id } => format!("/messages/{id}"),
            Self::AddServer => "/add-server".to_owned(),
        }
    }

    /// Stable route name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Home => "home",
            Self::Server { .. } => "server",
            Self::Friends => "friends",
            Self::AddFriend => "add-friend",
            Self::Profile => "profile",
            Self::DirectMessage { .. } => "direct-message",
            Self::AddServer => "add-server",
        }
    }

    #[must_use]
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login)
    }
}
