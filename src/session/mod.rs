//! # Session State
//!
//! The storefront shell does not own cart or authentication state — it reads
//! a [`SessionView`] snapshot supplied by a session backend and invokes two
//! mutators on it: opening the cart (local, infallible) and signing out
//! (remote, async, fallible).
//!
//! The backend sits behind the [`SessionService`] trait so the TUI never
//! depends on a concrete transport. [`HttpSessionService`] talks to a real
//! backend over HTTP; [`OfflineSessionService`] backs `--offline` runs and
//! rendering tests.

mod http;
mod service;

pub use http::HttpSessionService;
pub use service::{OfflineSessionService, SessionError, SessionService};

use serde::{Deserialize, Serialize};

/// Authenticated user identity. Presence in [`SessionView`] implies the
/// session is authenticated; the token is opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserIdentity {
    pub email: String,
    #[serde(default)]
    pub token: String,
}

/// Read-only snapshot of externally-owned cart and auth state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionView {
    #[serde(default)]
    pub cart_count: u32,
    #[serde(default)]
    pub user: Option<UserIdentity>,
}

impl SessionView {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
