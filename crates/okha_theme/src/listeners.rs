//! Callback registration with cancellation tokens
//!
//! Used for both OS color-scheme notifications and theme change
//! notifications. Listeners are invoked synchronously on the thread that
//! triggered the notification. The registry lock is released before any
//! listener runs, so a listener may subscribe or cancel without deadlocking.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

new_key_type! {
    /// Identifier for a registered listener
    pub struct ListenerId;
}

/// A registered callback
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

type ListenerMap<T> = Mutex<SlotMap<ListenerId, Listener<T>>>;

/// Lock a mutex, recovering the data if a previous holder panicked
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Set of listeners notified with a `&T`
pub struct ListenerRegistry<T> {
    listeners: Arc<ListenerMap<T>>,
}

impl<T> Clone for ListenerRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(SlotMap::with_key())),
        }
    }
}

impl<T: 'static> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the returned
    /// [`Subscription`] is cancelled or dropped.
    pub fn add<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = lock(&self.listeners).insert(Arc::new(listener));
        let registry: Weak<ListenerMap<T>> = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = registry.upgrade() {
                lock(&listeners).remove(id);
            }
        })
    }

    /// Invoke every listener with `value`
    pub fn notify(&self, value: &T) {
        let snapshot: SmallVec<[Listener<T>; 4]> =
            lock(&self.listeners).values().cloned().collect();
        for listener in snapshot {
            listener(value);
        }
    }

    /// Number of live listeners
    pub fn len(&self) -> usize {
        lock(&self.listeners).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cancellation token returned when registering a listener.
///
/// Dropping the token unregisters the listener; [`Subscription::cancel`]
/// does the same explicitly.
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A token with nothing to cancel (for sources that never change)
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Unregister now
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    /// Keep the listener registered for the lifetime of its source
    pub fn detach(mut self) {
        self.cancel = None;
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notify_reaches_every_listener() {
        let registry = ListenerRegistry::<u32>::new();
        let total = Arc::new(AtomicUsize::new(0));

        let t1 = total.clone();
        let _a = registry.add(move |v| {
            t1.fetch_add(*v as usize, Ordering::SeqCst);
        });
        let t2 = total.clone();
        let _b = registry.add(move |v| {
            t2.fetch_add(*v as usize * 10, Ordering::SeqCst);
        });

        registry.notify(&2);
        assert_eq!(total.load(Ordering::SeqCst), 22);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let registry = ListenerRegistry::<()>::new();
        let sub = registry.add(|_| {});
        assert_eq!(registry.len(), 1);
        drop(sub);
        assert!(registry.is_empty());

        let sub = registry.add(|_| {});
        sub.cancel();
        assert!(registry.is_empty());
    }

    #[test]
    fn detached_subscription_stays_registered() {
        let registry = ListenerRegistry::<()>::new();
        registry.add(|_| {}).detach();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn listener_may_subscribe_during_notify() {
        let registry = ListenerRegistry::<()>::new();
        let inner = registry.clone();
        let _sub = registry.add(move |_| {
            inner.add(|_| {}).detach();
        });
        registry.notify(&());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn cancel_after_registry_dropped_is_harmless() {
        let registry = ListenerRegistry::<()>::new();
        let sub = registry.add(|_| {});
        drop(registry);
        sub.cancel();
    }
}
