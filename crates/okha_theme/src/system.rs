//! Operating system color-scheme sources
//!
//! The controller never queries the OS directly. It reads and subscribes
//! through a [`SystemColorScheme`], so hosts can plug in a browser media
//! query, a desktop settings portal, a polling detector, or a test double.

use crate::listeners::{lock, ListenerRegistry, Subscription};
use crate::theme::ColorScheme;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Callback invoked with the new scheme after an OS preference change
pub type SchemeListener = Box<dyn Fn(&ColorScheme) + Send + Sync>;

/// The OS `prefers-color-scheme` signal
pub trait SystemColorScheme: Send + Sync {
    /// Current OS preference
    fn current(&self) -> ColorScheme;

    /// Register for change notifications.
    ///
    /// Implementations must have updated [`SystemColorScheme::current`]
    /// before invoking listeners.
    fn subscribe(&self, listener: SchemeListener) -> Subscription;
}

/// Detect the desktop color scheme once.
///
/// With the `platform-detect` feature this asks the desktop through
/// `dark-light`; otherwise, or when detection fails, it reports light.
pub fn detect_system_color_scheme() -> ColorScheme {
    #[cfg(feature = "platform-detect")]
    {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => ColorScheme::Dark,
            Ok(_) => ColorScheme::Light,
            Err(err) => {
                tracing::warn!("color scheme detection failed: {}", err);
                ColorScheme::Light
            }
        }
    }

    #[cfg(not(feature = "platform-detect"))]
    {
        tracing::trace!("platform-detect disabled, assuming light color scheme");
        ColorScheme::Light
    }
}

/// A source that never changes
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedColorScheme(pub ColorScheme);

impl SystemColorScheme for FixedColorScheme {
    fn current(&self) -> ColorScheme {
        self.0
    }

    fn subscribe(&self, _listener: SchemeListener) -> Subscription {
        Subscription::noop()
    }
}

/// A source driven by explicit calls.
///
/// Hosts forward platform events through [`ManualColorScheme::set`]; tests
/// use it to simulate OS changes and to count subscriptions.
#[derive(Default)]
pub struct ManualColorScheme {
    scheme: Mutex<ColorScheme>,
    listeners: ListenerRegistry<ColorScheme>,
    subscribe_calls: AtomicUsize,
}

impl ManualColorScheme {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: Mutex::new(scheme),
            ..Default::default()
        }
    }

    /// Update the scheme and notify listeners if it changed
    pub fn set(&self, scheme: ColorScheme) {
        {
            let mut current = lock(&self.scheme);
            if *current == scheme {
                return;
            }
            tracing::debug!(
                "ManualColorScheme::set - switching from {:?} to {:?}",
                *current,
                scheme
            );
            *current = scheme;
        }
        self.listeners.notify(&scheme);
    }

    /// Mirror a `prefers-color-scheme: dark` media query result
    pub fn set_dark(&self, dark: bool) {
        self.set(ColorScheme::from_dark(dark));
    }

    /// Live listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Total `subscribe` calls ever made
    pub fn subscribe_count(&self) -> usize {
        self.subscribe_calls.load(Ordering::SeqCst)
    }
}

impl SystemColorScheme for ManualColorScheme {
    fn current(&self) -> ColorScheme {
        *lock(&self.scheme)
    }

    fn subscribe(&self, listener: SchemeListener) -> Subscription {
        self.subscribe_calls.fetch_add(1, Ordering::SeqCst);
        self.listeners.add(listener)
    }
}
