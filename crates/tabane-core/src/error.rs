use thiserror::Error;

/// Errors that can occur while building Tabane components.
///
/// Resolution itself is total: once a resolver is constructed, grouping a
/// listing never fails. Only configuration and parser construction are
/// fallible.
#[derive(Debug, Error)]
pub enum TabaneError {
    /// A user-supplied or built-in pattern failed to compile.
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for Tabane operations.
pub type Result<T> = std::result::Result<T, TabaneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let bad = regex::Regex::new("(").unwrap_err();
        let err = TabaneError::from(bad);
        assert!(err.to_string().starts_with("regex compilation error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TabaneError>();
    }
}
