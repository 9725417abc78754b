//! Type introspection facility
//!
//! Provides the [`TypeOracle`] trait, the factory's pluggable answer to
//! "what kind of type does this name denote?", and [`StaticOracle`], an
//! in-memory implementation for hosts whose type universe is known up front
//! (and for test doubles).

use std::collections::HashMap;

/// The role a named type can play in a synthesized class
///
/// Classification is mutually exclusive: a name denotes exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// An ordinary or abstract class, contributing an `extends` clause
    Class,

    /// An interface, contributing an `implements` clause
    Interface,

    /// A mixin/trait unit, contributing a `use` statement in the class body
    Mixin,
}

impl TypeKind {
    /// Clause keyword associated with this kind (for diagnostics)
    #[inline]
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Class => "extends",
            Self::Interface => "implements",
            Self::Mixin => "uses",
        }
    }
}

/// Pluggable type-introspection capability
///
/// `None` means the name does not correspond to any loadable type; the
/// classifier turns that into an unresolved-dependency error.
pub trait TypeOracle: Send + Sync + std::fmt::Debug {
    /// Look up the kind of type the given name denotes
    fn kind_of(&self, name: &str) -> Option<TypeKind>;
}

/// In-memory type oracle backed by a name → kind map
///
/// Serves hosts with a statically known type universe, and doubles as the
/// stub oracle for tests. Re-declaring a name overwrites its prior kind.
#[derive(Debug, Default, Clone)]
pub struct StaticOracle {
    kinds: HashMap<String, TypeKind>,
}

impl StaticOracle {
    /// Create new empty oracle
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Declare a name as a given kind
    pub fn declare(&mut self, name: impl Into<String>, kind: TypeKind) -> &mut Self {
        self.kinds.insert(name.into(), kind);
        self
    }

    /// Declare a name as an ordinary class
    pub fn declare_class(&mut self, name: impl Into<String>) -> &mut Self {
        self.declare(name, TypeKind::Class)
    }

    /// Declare a name as an interface
    pub fn declare_interface(&mut self, name: impl Into<String>) -> &mut Self {
        self.declare(name, TypeKind::Interface)
    }

    /// Declare a name as a mixin/trait unit
    pub fn declare_mixin(&mut self, name: impl Into<String>) -> &mut Self {
        self.declare(name, TypeKind::Mixin)
    }

    /// Check if a name has been declared
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Number of declared names
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if no names have been declared
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl TypeOracle for StaticOracle {
    fn kind_of(&self, name: &str) -> Option<TypeKind> {
        self.kinds.get(name).copied()
    }
}
