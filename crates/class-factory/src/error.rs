//! Error types for the class factory
//!
//! All failures surface to the immediate caller; there is no retry or
//! fallback anywhere in the factory. Cyclic template references are not an
//! error value at all; expansion recurses until the stack is exhausted.

/// Main class-factory error type
#[derive(Debug, thiserror::Error)]
pub enum ClassFactoryError {
    /// A terminal dependency name does not resolve to any loadable type
    #[error("unresolved dependency `{name}`: no loadable type with that name")]
    UnresolvedDependency {
        /// The dependency name that failed to resolve
        name: String,
    },

    /// Scratch-file write or cached-file read failed
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A compilation unit could not be parsed back into a class shape
    #[error("malformed stub: {0}")]
    MalformedStub(String),

    /// The stub describes a shape the type model rejects at load time
    #[error("unsupported class shape: {0}")]
    UnsupportedShape(String),
}

impl ClassFactoryError {
    /// Create an unresolved-dependency error for the given name
    #[inline]
    #[must_use]
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::UnresolvedDependency { name: name.into() }
    }

    /// Check if this is a dependency resolution failure
    #[inline]
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::UnresolvedDependency { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_constructor_and_predicate() {
        let err = ClassFactoryError::unresolved("MissingType");
        assert!(err.is_unresolved());
        assert_eq!(
            err.to_string(),
            "unresolved dependency `MissingType`: no loadable type with that name"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ClassFactoryError::from(io);
        assert!(matches!(err, ClassFactoryError::Io(_)));
        assert!(!err.is_unresolved());
    }
}
