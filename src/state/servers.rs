//! Self-hosted server list state and the store actions that sync it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ServerStore` is the only writer of the cached server list. Components
//! read the `RwSignal<ServersState>` from context and trigger actions; each
//! action issues exactly one `ApiClient` call and reconciles the result.
//!
//! DESIGN
//! ======
//! Reconciliation rules are plain methods on `ServersState` so they can be
//! tested without a network. Actions are not queued against each other: when
//! two responses touch the same id, whichever resolves last wins.
//!
//! ERROR HANDLING
//! ==============
//! API failures stop here. They are logged and turned into a fixed message
//! in `error`, which stays until the next failure or an explicit
//! `clear_error`.

#[cfg(test)]
#[path = "servers_test.rs"]
mod servers_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api::ApiClient;
use crate::net::types::{NewServer, SelfHostedServer, ServerConfig, ServerPatch};

/// Cached server collection plus UI status flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServersState {
    /// Servers in last-fetch order, followed by any created since.
    pub servers: Vec<SelfHostedServer>,
    /// True while a full fetch is in flight.
    pub loading: bool,
    /// Message from the most recent failed action.
    pub error: Option<String>,
}

/// Store actions, used to pick the user-facing failure message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreAction {
    Fetch,
    Create,
    Update,
    Delete,
}

impl StoreAction {
    #[must_use]
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Fetch => "error loading servers",
            Self::Create => "error creating server",
            Self::Update => "error updating server",
            Self::Delete => "error deleting server",
        }
    }
}

/// Result of one store action as seen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The response was reconciled into the cache.
    Applied,
    /// The request succeeded but no cached entry had the target id, so the
    /// cache was left as is.
    NotCached,
    /// The request failed; `error` was set.
    Failed,
}

impl ServersState {
    /// Overwrite the cache with a full listing.
    pub fn replace_all(&mut self, servers: Vec<SelfHostedServer>) {
        self.servers = servers;
    }

    pub fn append(&mut self, server: SelfHostedServer) {
        self.servers.push(server);
    }

    /// Replace the entry with `id` at its current position.
    ///
    /// Returns `false` (and leaves the cache untouched) if no entry matches.
    pub fn replace(&mut self, id: i64, server: SelfHostedServer) -> bool {
        match self.servers.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                *slot = server;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with `id`. Returns `false` if none matched.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.servers.len();
        self.servers.retain(|s| s.id != id);
        self.servers.len() != before
    }

    pub fn record_failure(&mut self, action: StoreAction) {
        self.error = Some(action.error_message().to_owned());
    }
}

/// Holds `loading` high for the lifetime of a fetch, including early
/// returns and dropped futures.
struct LoadingGuard {
    state: RwSignal<ServersState>,
}

impl LoadingGuard {
    fn acquire(state: RwSignal<ServersState>) -> Self {
        state.update(|s| s.loading = true);
        Self { state }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // The signal may already be disposed if the owning view unmounted.
        let _ = self.state.try_update(|s| s.loading = false);
    }
}

/// Reactive store for the self-hosted server collection.
#[derive(Clone)]
pub struct ServerStore {
    client: ApiClient,
    state: RwSignal<ServersState>,
}

impl ServerStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client, state: RwSignal::new(ServersState::default()) }
    }

    /// Signal for components to subscribe to.
    #[must_use]
    pub fn state(&self) -> RwSignal<ServersState> {
        self.state
    }

    /// Current state without tracking.
    #[must_use]
    pub fn snapshot(&self) -> ServersState {
        self.state.get_untracked()
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    fn fail(&self, action: StoreAction, err: &dyn std::fmt::Display) -> ActionOutcome {
        leptos::logging::warn!("{}: {err}", action.error_message());
        self.state.update(|s| s.record_failure(action));
        ActionOutcome::Failed
    }

    /// Reload the whole collection, replacing the cache on success.
    pub async fn fetch_all(&self) -> ActionOutcome {
        let _loading = LoadingGuard::acquire(self.state);
        match self.client.list_servers().await {
            Ok(servers) => {
                self.state.update(|s| s.replace_all(servers));
                ActionOutcome::Applied
            }
            Err(e) => self.fail(StoreAction::Fetch, &e),
        }
    }

    /// Create a server and append the service's record to the cache.
    pub async fn create(
        &self,
        domain: impl Into<String>,
        ip: Option<String>,
        config: Option<ServerConfig>,
    ) -> ActionOutcome {
        let payload = NewServer { domain: domain.into(), ip, config };
        match self.client.create_server(&payload).await {
            Ok(server) => {
                self.state.update(|s| s.append(server));
                ActionOutcome::Applied
            }
            Err(e) => self.fail(StoreAction::Create, &e),
        }
    }

    /// Apply a partial update and swap the returned record in place.
    pub async fn update(&self, id: i64, patch: ServerPatch) -> ActionOutcome {
        match self.client.update_server(id, &patch).await {
            Ok(server) => {
                let replaced = self.state.try_update(|s| s.replace(id, server)).unwrap_or(false);
                if replaced {
                    ActionOutcome::Applied
                } else {
                    leptos::logging::log!("server {id} updated remotely but not cached; response dropped");
                    ActionOutcome::NotCached
                }
            }
            Err(e) => self.fail(StoreAction::Update, &e),
        }
    }

    /// Delete a server and drop it from the cache.
    pub async fn delete(&self, id: i64) -> ActionOutcome {
        match self.client.delete_server(id).await {
            Ok(()) => {
                let removed = self.state.try_update(|s| s.remove(id)).unwrap_or(false);
                if removed { ActionOutcome::Applied } else { ActionOutcome::NotCached }
            }
            Err(e) => self.fail(StoreAction::Delete, &e),
        }
    }
}
