//! Scoped provider lookup
//!
//! A mounted [`ThemeController`](crate::ThemeController) can make itself the
//! active provider for the current thread with
//! [`provide`](crate::ThemeController::provide) or
//! [`enter`](crate::ThemeController::enter). Code running inside that scope
//! retrieves the handle with [`use_theme`] instead of threading it through
//! every call. Scopes nest; the innermost provider wins.
//!
//! ```ignore
//! controller.provide(|| {
//!     let theme = use_theme();
//!     theme.set_variant(ThemeVariant::Ocean);
//! });
//! ```

use std::cell::RefCell;
use std::marker::PhantomData;

use crate::controller::ThemeHandle;
use crate::error::{Result, ThemeError};

thread_local! {
    static PROVIDERS: RefCell<Vec<ThemeHandle>> = const { RefCell::new(Vec::new()) };
}

/// Keeps a provider active; popping happens on drop
#[must_use = "the provider scope ends when the guard is dropped"]
pub struct ScopeGuard {
    depth: usize,
    // Scopes are per-thread; the guard must be dropped where it was created
    _not_send: PhantomData<*const ()>,
}

pub(crate) fn enter(handle: ThemeHandle) -> ScopeGuard {
    let depth = PROVIDERS.with(|stack| {
        let mut stack = stack.borrow_mut();
        stack.push(handle);
        stack.len()
    });
    ScopeGuard {
        depth,
        _not_send: PhantomData,
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        PROVIDERS.with(|stack| {
            let mut stack = stack.borrow_mut();
            // Guards drop in reverse order of creation; tolerate leaks
            // (mem::forget) by truncating to the depth below this guard.
            stack.truncate(self.depth.saturating_sub(1));
        });
    }
}

/// Innermost active provider, or [`ThemeError::MissingProvider`]
pub fn try_use_theme() -> Result<ThemeHandle> {
    PROVIDERS
        .with(|stack| stack.borrow().last().cloned())
        .ok_or(ThemeError::MissingProvider)
}

/// Innermost active provider.
///
/// # Panics
///
/// Panics if called outside any provider scope. A missing provider is a
/// mounting bug, not a runtime condition; use [`try_use_theme`] to branch
/// on it instead.
pub fn use_theme() -> ThemeHandle {
    match try_use_theme() {
        Ok(handle) => handle,
        Err(err) => panic!("{err}"),
    }
}

/// Whether any provider is active on this thread
pub fn has_provider() -> bool {
    PROVIDERS.with(|stack| !stack.borrow().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_root::MemoryStyleRoot;
    use crate::system::FixedColorScheme;
    use crate::theme::{ColorScheme, ThemePreference, ThemeVariant};
    use crate::{ThemeController, ThemeOptions};
    use std::sync::Arc;

    fn controller(variant: ThemeVariant) -> ThemeController {
        ThemeController::mount(
            ThemeOptions::new()
                .theme(ThemePreference::Light)
                .variant(variant),
            MemoryStyleRoot::new(),
            Arc::new(FixedColorScheme(ColorScheme::Light)),
        )
    }

    #[test]
    fn lookup_outside_a_scope_fails() {
        assert!(!has_provider());
        let err = try_use_theme().unwrap_err();
        assert!(err.to_string().contains("must be used within a ThemeProvider"));
    }

    #[test]
    #[should_panic(expected = "must be used within a ThemeProvider")]
    fn use_theme_panics_without_provider() {
        let _ = use_theme();
    }

    #[test]
    fn innermost_scope_wins_and_unwinds() {
        let outer = controller(ThemeVariant::Forest);
        let inner = controller(ThemeVariant::Ocean);

        outer.provide(|| {
            assert_eq!(use_theme().variant(), ThemeVariant::Forest);
            inner.provide(|| {
                assert_eq!(use_theme().variant(), ThemeVariant::Ocean);
            });
            assert_eq!(use_theme().variant(), ThemeVariant::Forest);
        });
        assert!(!has_provider());
    }

    #[test]
    fn writes_through_scoped_handle_reach_the_controller() {
        let ctl = controller(ThemeVariant::Base);
        {
            let _guard = ctl.enter();
            use_theme().set_variant(ThemeVariant::Sepia);
        }
        assert_eq!(ctl.handle().variant(), ThemeVariant::Sepia);
        assert!(!has_provider());
    }
}
