//! Local session flag and the routing guard built on it.
//!
//! "Logged in" means a current-user record exists; no credential is ever
//! verified. The guard only decides which screen to show.

pub mod guard;
pub mod store;

pub use guard::{resolve_route, Route};
pub use store::{FileSessionStore, Identity, MemorySessionStore, SessionError, SessionStore};
