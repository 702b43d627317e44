#![forbid(unsafe_code)]

//! Change notification.
//!
//! Independent rendering surfaces stay synchronized with the active theme
//! through an explicit publish-subscribe channel: the context pushes a
//! [`StyleChanged`] event after every mutation, and each surface holds a
//! [`Subscription`] guard for as long as it wants to receive them. Dropping
//! the guard deregisters the listener, so a torn-down surface can never leak
//! an observer.

use std::sync::{Arc, Mutex, Weak};

use aura_theme::{EffectiveStyle, ThemeId};

/// Event delivered to subscribers after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleChanged {
    pub theme: ThemeId,
    pub style: EffectiveStyle,
}

type Listener = Box<dyn Fn(&StyleChanged) + Send>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Fan-out hub for style-change events.
///
/// Listeners are invoked synchronously, in registration order, on the thread
/// that triggered the change. Listeners are read-only consumers: they must
/// not mutate the theme context from inside the callback.
#[derive(Clone, Default)]
pub struct ChangeHub {
    inner: Arc<Mutex<HubInner>>,
}

impl ChangeHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The returned guard keeps it registered; dropping
    /// the guard deregisters it.
    #[must_use]
    pub fn subscribe(&self, listener: impl Fn(&StyleChanged) + Send + 'static) -> Subscription {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(listener)));
        tracing::trace!(listener = id, "subscribed to style changes");
        Subscription {
            id,
            hub: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver an event to every live listener, in registration order.
    pub fn notify(&self, event: &StyleChanged) {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        tracing::trace!(
            theme = event.theme.key(),
            listeners = inner.listeners.len(),
            "notifying style change"
        );
        for (_, listener) in &inner.listeners {
            listener(event);
        }
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .listeners
            .len()
    }
}

impl std::fmt::Debug for ChangeHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// RAII registration guard returned by [`ChangeHub::subscribe`].
#[must_use = "dropping the subscription deregisters the listener"]
pub struct Subscription {
    id: u64,
    hub: Weak<Mutex<HubInner>>,
}

impl Subscription {
    /// Deregister explicitly. Equivalent to dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
            inner.listeners.retain(|(id, _)| *id != self.id);
            tracing::trace!(listener = self.id, "unsubscribed from style changes");
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
