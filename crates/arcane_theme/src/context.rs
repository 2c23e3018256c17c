//! Scoped theme context
//!
//! `ThemeContext` distributes the active palette and token scales down a
//! composition subtree without threading them through every call. Each
//! thread owns an independent provider stack, so concurrent traversals of
//! separate subtrees cannot interfere with each other.
//!
//! `provide` follows strict stack discipline: a nested call shadows the
//! outer frame for exactly the duration of its closure and restores it on
//! exit, including on unwind.

use crate::error::ThemeError;
use crate::tokens::{Palette, SpacingTokens};
use std::cell::RefCell;

thread_local! {
    static PROVIDER_STACK: RefCell<Vec<ThemeFrame>> = const { RefCell::new(Vec::new()) };
}

/// One provided theme scope: the palette plus the token scales
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeFrame {
    pub palette: Palette,
    pub spacing: SpacingTokens,
}

/// Scoped provider for the active theme
pub struct ThemeContext;

impl ThemeContext {
    /// Make `palette` and `spacing` the current theme for the duration of
    /// `scope`. Nested calls shadow outer ones and restore them on exit.
    pub fn provide<R>(palette: Palette, spacing: SpacingTokens, scope: impl FnOnce() -> R) -> R {
        PROVIDER_STACK.with(|stack| {
            stack.borrow_mut().push(ThemeFrame { palette, spacing });
        });
        // Pop on drop so a panicking scope still unwinds the stack.
        let _guard = FrameGuard;
        scope()
    }

    /// The nearest enclosing provided theme.
    ///
    /// Returns [`ThemeError::MissingContext`] outside any `provide` scope;
    /// there is no silent default.
    pub fn current() -> Result<ThemeFrame, ThemeError> {
        PROVIDER_STACK.with(|stack| {
            stack
                .borrow()
                .last()
                .copied()
                .ok_or(ThemeError::MissingContext)
        })
    }

    /// Convenience accessor for the current palette
    pub fn palette() -> Result<Palette, ThemeError> {
        Self::current().map(|frame| frame.palette)
    }

    /// Convenience accessor for the current spacing scale
    pub fn spacing() -> Result<SpacingTokens, ThemeError> {
        Self::current().map(|frame| frame.spacing)
    }

    /// Depth of the provider stack on this thread
    pub fn depth() -> usize {
        PROVIDER_STACK.with(|stack| stack.borrow().len())
    }
}

struct FrameGuard;

impl Drop for FrameGuard {
    fn drop(&mut self) {
        PROVIDER_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_outside_provide_is_an_error() {
        assert_eq!(ThemeContext::current(), Err(ThemeError::MissingContext));
    }

    #[test]
    fn nested_provide_shadows_and_restores() {
        let outer = Palette::light();
        let inner = Palette::dark();
        let spacing = SpacingTokens::default();

        ThemeContext::provide(outer, spacing, || {
            assert_eq!(ThemeContext::palette().unwrap(), outer);

            ThemeContext::provide(inner, spacing, || {
                assert_eq!(ThemeContext::palette().unwrap(), inner);
                assert_eq!(ThemeContext::depth(), 2);
            });

            // The outer frame is restored exactly
            assert_eq!(ThemeContext::palette().unwrap(), outer);
            assert_eq!(ThemeContext::depth(), 1);
        });

        assert_eq!(ThemeContext::depth(), 0);
        assert_eq!(ThemeContext::current(), Err(ThemeError::MissingContext));
    }

    #[test]
    fn panicking_scope_still_pops_the_frame() {
        let result = std::panic::catch_unwind(|| {
            ThemeContext::provide(Palette::light(), SpacingTokens::default(), || {
                panic!("scope failed");
            })
        });
        assert!(result.is_err());
        assert_eq!(ThemeContext::depth(), 0);
    }

    #[test]
    fn stacks_are_independent_per_thread() {
        ThemeContext::provide(Palette::light(), SpacingTokens::default(), || {
            let handle = std::thread::spawn(|| ThemeContext::current());
            // The spawned thread has its own empty stack
            assert_eq!(handle.join().unwrap(), Err(ThemeError::MissingContext));
            assert_eq!(ThemeContext::depth(), 1);
        });
    }
}
