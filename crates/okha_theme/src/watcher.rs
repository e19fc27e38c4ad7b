//! Polling system color scheme watcher
//!
//! For hosts without a push notification for color-scheme changes. The host
//! calls [`PollingColorScheme::poll`] from its own event loop (on a timer,
//! on window focus, ...); a change is delivered to subscribers synchronously
//! from inside that call.

use crate::listeners::{lock, ListenerRegistry, Subscription};
use crate::system::{detect_system_color_scheme, SchemeListener, SystemColorScheme};
use crate::theme::ColorScheme;
use std::sync::Mutex;

/// Detector function queried on every poll
pub type SchemeDetector = Box<dyn Fn() -> ColorScheme + Send + Sync>;

/// [`SystemColorScheme`] backed by a detector that is re-run on demand
pub struct PollingColorScheme {
    detector: SchemeDetector,
    last: Mutex<ColorScheme>,
    listeners: ListenerRegistry<ColorScheme>,
}

impl PollingColorScheme {
    pub fn new<F>(detector: F) -> Self
    where
        F: Fn() -> ColorScheme + Send + Sync + 'static,
    {
        let initial = detector();
        Self {
            detector: Box::new(detector),
            last: Mutex::new(initial),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Watch the desktop setting via [`detect_system_color_scheme`]
    pub fn system() -> Self {
        Self::new(detect_system_color_scheme)
    }

    /// Re-run the detector; returns true (and notifies) if the scheme changed
    pub fn poll(&self) -> bool {
        let detected = (self.detector)();
        {
            let mut last = lock(&self.last);
            if *last == detected {
                return false;
            }
            tracing::debug!(
                "system color scheme changed from {:?} to {:?}",
                *last,
                detected
            );
            *last = detected;
        }
        self.listeners.notify(&detected);
        true
    }
}

impl SystemColorScheme for PollingColorScheme {
    fn current(&self) -> ColorScheme {
        *lock(&self.last)
    }

    fn subscribe(&self, listener: SchemeListener) -> Subscription {
        self.listeners.add(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn poll_reports_changes_once() {
        let dark = Arc::new(AtomicBool::new(false));
        let flag = dark.clone();
        let watcher = PollingColorScheme::new(move || {
            ColorScheme::from_dark(flag.load(Ordering::SeqCst))
        });
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let _sub = watcher.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(watcher.current(), ColorScheme::Light);
        assert!(!watcher.poll());

        dark.store(true, Ordering::SeqCst);
        assert!(watcher.poll());
        assert!(!watcher.poll());
        assert_eq!(watcher.current(), ColorScheme::Dark);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
