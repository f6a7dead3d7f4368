//! Networking modules for the REST collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `transport` moves prepared requests over
//! the network, and `api` is the authenticated client built on both.

pub mod api;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
