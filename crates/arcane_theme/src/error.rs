//! Theme error taxonomy
//!
//! Both errors are programming errors at integration seams, not runtime
//! conditions: there is no retry or recovery path.

/// Errors surfaced by the theming core
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// `ThemeContext::current()` was called with no enclosing `provide` scope.
    ///
    /// Silently substituting a default palette here would mask integration
    /// bugs, so the missing scope is reported instead.
    #[error("no theme provided in the current scope; wrap the call in ThemeContext::provide")]
    MissingContext,

    /// An unrecognized variant id was passed to [`crate::ThemeVariant::from_id`].
    ///
    /// The variant constructors themselves are total over the closed enum;
    /// only the dispatch-by-name boundary can hit this.
    #[error("unknown theme variant id: {0:?}")]
    UnknownVariant(String),
}
