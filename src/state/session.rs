//! Session-token persistence and the session-invalid event channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only client-side artifact that survives a reload. In
//! the browser it lives in `localStorage` under a single key; native
//! builds (tests, tooling) use a shared in-memory slot so the same store
//! contract can be exercised without a browser. Expiry is never tracked
//! locally; it is discovered reactively via a 401 from a remote service.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "crmdesk_token";

/// Single-slot store for the opaque session token.
///
/// Cloneable handle; all clones observe the same slot.
#[derive(Clone, Default)]
pub struct SessionStore {
    #[cfg(not(feature = "csr"))]
    slot: std::sync::Arc<std::sync::Mutex<Option<String>>>,
}

impl SessionStore {
    /// Read the current token, if any.
    pub fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            self.slot.lock().ok().and_then(|slot| slot.clone())
        }
    }

    /// Replace the stored token.
    pub fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            if let Ok(mut slot) = self.slot.lock() {
                *slot = Some(token.to_owned());
            }
        }
    }

    /// Evict the stored token. Idempotent.
    pub fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            if let Ok(mut slot) = self.slot.lock() {
                *slot = None;
            }
        }
    }
}

/// Typed "session invalid" channel between the HTTP layer and the routing
/// coordinator.
///
/// The HTTP wrapper bumps the epoch when a 401 is observed; the top-level
/// coordinator reacts to epoch changes and owns the navigation to the
/// login view. The transport layer itself never navigates.
#[derive(Clone, Copy)]
pub struct SessionEvents {
    epoch: RwSignal<u64>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self { epoch: RwSignal::new(0) }
    }

    /// Signal that the current session was rejected by a remote service.
    /// Each call is one distinct invalidation event.
    pub fn notify_expired(&self) {
        self.epoch.update(|n| *n += 1);
    }

    /// Number of invalidation events observed so far. Reactive.
    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    /// Non-reactive read, for use outside a tracking context.
    pub fn epoch_untracked(&self) -> u64 {
        self.epoch.get_untracked()
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}
