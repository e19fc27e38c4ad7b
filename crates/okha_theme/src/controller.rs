//! Theme controller
//!
//! Owns the `(preference, variant, overrides)` state for one application or
//! subtree, resolves it against the OS color scheme, and publishes the
//! result to a [`StyleRoot`].
//!
//! Every transition (`set_theme`, `set_variant`, `set_custom_variables`, or an
//! OS change while following the system) runs a full re-resolution and
//! publish. Nothing is batched or deduplicated: rapid successive calls each
//! write the root, in call order.
//!
//! The OS subscription is scoped to one effect cycle: each transition cancels
//! the previous subscription and registers a fresh one if the preference is
//! `System`, so at most one listener is live per controller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::listeners::{lock, ListenerRegistry, Subscription};
use crate::registry;
use crate::scope::{self, ScopeGuard};
use crate::style_root::{StyleRoot, THEME_ATTRIBUTE, VARIANT_ATTRIBUTE};
use crate::system::SystemColorScheme;
use crate::theme::{ColorScheme, ThemePreference, ThemeVariant};
use crate::tokens::{VariableOverrides, VariableSet};

/// Mount-time configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Initial preference (defaults to `System`)
    pub default_theme: ThemePreference,
    /// Initial variant (defaults to `Base`)
    pub default_variant: ThemeVariant,
    /// Overrides applied from the first resolution onward
    pub custom_variables: Option<VariableOverrides>,
}

impl ThemeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: ThemePreference) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn variant(mut self, variant: ThemeVariant) -> Self {
        self.default_variant = variant;
        self
    }

    pub fn custom_variables(mut self, overrides: VariableOverrides) -> Self {
        self.custom_variables = Some(overrides);
        self
    }
}

/// Point-in-time view of the controller, as handed to change listeners
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeSnapshot {
    /// Requested preference
    pub theme: ThemePreference,
    /// Preference resolved against the OS at snapshot time
    pub actual_theme: ColorScheme,
    pub variant: ThemeVariant,
    pub custom_variables: Option<VariableOverrides>,
}

/// Authoritative state; everything else is derived from it
#[derive(Clone, Debug)]
struct ControllerState {
    preference: ThemePreference,
    variant: ThemeVariant,
    overrides: Option<VariableOverrides>,
}

struct Shared {
    state: Mutex<ControllerState>,
    root: Mutex<Box<dyn StyleRoot>>,
    system: Arc<dyn SystemColorScheme>,
    system_subscription: Mutex<Option<Subscription>>,
    change_listeners: ListenerRegistry<ThemeSnapshot>,
    mounted: AtomicBool,
}

impl Shared {
    fn state(&self) -> ControllerState {
        lock(&self.state).clone()
    }

    fn resolve_mode(&self, preference: ThemePreference) -> ColorScheme {
        match preference {
            ThemePreference::System => self.system.current(),
            explicit => explicit.resolve(ColorScheme::Light),
        }
    }

    fn snapshot(&self) -> ThemeSnapshot {
        let state = self.state();
        ThemeSnapshot {
            theme: state.preference,
            actual_theme: self.resolve_mode(state.preference),
            variant: state.variant,
            custom_variables: state.overrides,
        }
    }

    /// Resolved mode and merged variables for `state`
    fn resolve(&self, state: &ControllerState) -> (ColorScheme, VariableSet) {
        let mode = self.resolve_mode(state.preference);
        let mut vars = registry::resolve(mode, state.variant);
        if let Some(overrides) = &state.overrides {
            vars.apply(overrides);
        }
        (mode, vars)
    }

    fn effective_variables(&self) -> VariableSet {
        self.resolve(&self.state()).1
    }

    /// Write marker attributes and every variable to the style root
    fn publish(&self) {
        let state = self.state();
        let (mode, vars) = self.resolve(&state);

        tracing::debug!(
            "ThemeController::publish - theme={} variant={} overrides={}",
            mode,
            state.variant,
            state.overrides.as_ref().map_or(0, VariableOverrides::len)
        );

        let mut root = lock(&self.root);
        root.set_attribute(THEME_ATTRIBUTE, mode.id());
        root.set_attribute(VARIANT_ATTRIBUTE, state.variant.id());
        for (var, value) in vars.iter() {
            tracing::trace!("--{} = {}", var.css_name(), value);
            root.set_property(&var.custom_property(), value);
        }
    }

    /// Tear down the previous OS subscription and register a new one if the
    /// preference follows the system
    fn resubscribe(self: &Arc<Self>) {
        let previous = lock(&self.system_subscription).take();
        drop(previous);

        if !self.mounted.load(Ordering::SeqCst) {
            return;
        }
        if !lock(&self.state).preference.follows_system() {
            return;
        }

        let weak: Weak<Shared> = Arc::downgrade(self);
        let subscription = self.system.subscribe(Box::new(move |scheme| {
            if let Some(shared) = weak.upgrade() {
                tracing::debug!("system color scheme changed to {}", scheme);
                shared.publish();
                shared.notify();
            }
        }));
        *lock(&self.system_subscription) = Some(subscription);
    }

    fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
        let previous = lock(&self.system_subscription).take();
        drop(previous);
    }

    fn notify(&self) {
        if !self.change_listeners.is_empty() {
            self.change_listeners.notify(&self.snapshot());
        }
    }

    /// One effect cycle: resubscribe, publish, notify
    fn commit(self: &Arc<Self>) {
        self.resubscribe();
        self.publish();
        self.notify();
    }

    fn update(self: &Arc<Self>, f: impl FnOnce(&mut ControllerState)) {
        f(&mut lock(&self.state));
        self.commit();
    }
}

/// Owner of a mounted theme scope.
///
/// Dropping the controller (or calling [`ThemeController::unmount`])
/// releases its OS subscription. Handles obtained from it stay readable but
/// no longer follow OS changes.
pub struct ThemeController {
    handle: ThemeHandle,
}

impl ThemeController {
    /// Mount a controller: resolve, publish, and subscribe to the OS source
    /// if the initial preference is `System`
    pub fn mount<R>(options: ThemeOptions, root: R, system: Arc<dyn SystemColorScheme>) -> Self
    where
        R: StyleRoot + 'static,
    {
        tracing::debug!(
            "ThemeController::mount - theme={} variant={}",
            options.default_theme,
            options.default_variant
        );

        let shared = Arc::new(Shared {
            state: Mutex::new(ControllerState {
                preference: options.default_theme,
                variant: options.default_variant,
                overrides: options.custom_variables,
            }),
            root: Mutex::new(Box::new(root)),
            system,
            system_subscription: Mutex::new(None),
            change_listeners: ListenerRegistry::new(),
            mounted: AtomicBool::new(true),
        });
        shared.resubscribe();
        shared.publish();

        Self {
            handle: ThemeHandle { shared },
        }
    }

    /// Handle for descendants
    pub fn handle(&self) -> &ThemeHandle {
        &self.handle
    }

    /// Run `f` with this controller as the innermost provider, so
    /// [`crate::use_theme`] resolves to it
    pub fn provide<T>(&self, f: impl FnOnce() -> T) -> T {
        let _guard = self.enter();
        f()
    }

    /// Make this controller the innermost provider until the guard drops
    pub fn enter(&self) -> ScopeGuard {
        scope::enter(self.handle.clone())
    }

    /// Explicit teardown; equivalent to dropping the controller
    pub fn unmount(self) {}
}

impl Drop for ThemeController {
    fn drop(&mut self) {
        tracing::debug!("ThemeController::unmount");
        self.handle.shared.unmount();
    }
}

/// Read/write access to a mounted controller's theme state
#[derive(Clone)]
pub struct ThemeHandle {
    shared: Arc<Shared>,
}

impl ThemeHandle {
    // ========== Read ==========

    /// Requested preference (`Light`, `Dark` or `System`)
    pub fn theme(&self) -> ThemePreference {
        lock(&self.shared.state).preference
    }

    /// Preference resolved against the OS right now
    pub fn actual_theme(&self) -> ColorScheme {
        self.shared.resolve_mode(self.theme())
    }

    pub fn variant(&self) -> ThemeVariant {
        lock(&self.shared.state).variant
    }

    pub fn custom_variables(&self) -> Option<VariableOverrides> {
        lock(&self.shared.state).overrides.clone()
    }

    /// Resolved variables with overrides applied
    pub fn variables(&self) -> VariableSet {
        self.shared.effective_variables()
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        self.shared.snapshot()
    }

    /// Whether an OS change listener is currently registered
    pub fn is_following_system(&self) -> bool {
        lock(&self.shared.system_subscription).is_some()
    }

    // ========== Write ==========

    pub fn set_theme(&self, theme: ThemePreference) {
        tracing::debug!("ThemeHandle::set_theme - {}", theme);
        self.shared.update(|state| state.preference = theme);
    }

    pub fn set_variant(&self, variant: ThemeVariant) {
        tracing::debug!("ThemeHandle::set_variant - {}", variant);
        self.shared.update(|state| state.variant = variant);
    }

    /// Replace the override map.
    ///
    /// Earlier overrides are discarded, not merged; use
    /// [`ThemeHandle::merge_custom_variables`] for incremental updates.
    pub fn set_custom_variables(&self, overrides: VariableOverrides) {
        tracing::debug!(
            "ThemeHandle::set_custom_variables - {} entries",
            overrides.len()
        );
        self.shared.update(|state| state.overrides = Some(overrides));
    }

    /// Layer `overrides` over the current ones; new keys win
    pub fn merge_custom_variables(&self, overrides: &VariableOverrides) {
        self.shared.update(|state| {
            state
                .overrides
                .get_or_insert_with(VariableOverrides::new)
                .extend_from(overrides);
        });
    }

    /// Drop all overrides
    pub fn clear_custom_variables(&self) {
        self.shared.update(|state| state.overrides = None);
    }

    /// Advance the preference through light → dark → system → light
    pub fn cycle_theme(&self) {
        self.set_theme(self.theme().next());
    }

    /// Re-publish the current state without changing it
    pub fn refresh(&self) {
        self.shared.publish();
    }

    /// Observe every committed change
    pub fn on_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ThemeSnapshot) + Send + Sync + 'static,
    {
        self.shared.change_listeners.add(listener)
    }
}

impl std::fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state();
        f.debug_struct("ThemeHandle")
            .field("theme", &state.preference)
            .field("variant", &state.variant)
            .field("overrides", &state.overrides)
            .finish()
    }
}
