//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the bearer token; `servers` owns the cached server list.
//! Each has exactly one writer and is read freely elsewhere.

pub mod servers;
pub mod session;
