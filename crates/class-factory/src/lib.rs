//! Class Factory
//!
//! Synthesizes anonymous class definitions on demand from declarative lists
//! of dependency names, caches the rendered source under its content hash,
//! and materializes it into a callable constructor.
//!
//! # Core Concepts
//!
//! - [`GenericClass`]: an ordered, deduplicated dependency-name sequence
//! - [`ClassFactory`]: registry + configuration + oracle + materializer
//! - [`TypeOracle`]: pluggable "what kind of type is this name?" capability
//! - [`Materializer`]: pluggable compile-from-cache / evaluate-inline loader
//! - [`ContentHash`]: SHA-256 content addressing for cached stubs
//!
//! # Example
//!
//! ```rust
//! use class_factory::{new_class, ClassFactory, StaticOracle};
//! use std::sync::Arc;
//!
//! let mut oracle = StaticOracle::new();
//! oracle.declare_interface("Jsonable").declare_mixin("Macroable");
//!
//! let mut factory = ClassFactory::new(Arc::new(oracle));
//! factory.set_template("jsonish", ["Jsonable", "Macroable"]);
//!
//! let class = new_class(["jsonish"]);
//! let source = factory.source(&class).unwrap();
//! assert!(source.contains("implements Jsonable"));
//! ```

// Core modules
mod class;
mod error;
mod factory;
mod hash;
mod loader;
mod oracle;
mod registry;
mod stub;

// Re-exports
pub use class::{Classified, GenericClass, Terminals};
pub use error::ClassFactoryError;
pub use factory::ClassFactory;
pub use hash::{ContentHash, HashError};
pub use loader::{parse_unit, ClassShape, Constructor, Instance, Materializer, StubLoader};
pub use oracle::{StaticOracle, TypeKind, TypeOracle};
pub use registry::{FactoryConfig, TemplateRegistry};

/// Create a new generic class from dependency names
///
/// Convenience constructor matching the factory's invocation style:
/// `new_class(["SomeInterface"])`.
#[must_use]
pub fn new_class<I, S>(dependencies: I) -> GenericClass
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    GenericClass::new(dependencies)
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn new_class_matches_direct_construction() {
        let via_helper = new_class(["A", "B", "A"]);
        let direct = GenericClass::new(["A", "B"]);
        assert_eq!(via_helper, direct);
    }

    #[test]
    fn full_render_pipeline() {
        let mut oracle = StaticOracle::new();
        oracle
            .declare_class("Base")
            .declare_interface("Contract")
            .declare_mixin("Helpers");

        let mut factory = ClassFactory::new(Arc::new(oracle));
        factory.set_template("bundle", ["Contract", "Helpers"]);

        let mut class = new_class(["Base"]);
        class.add_dependency(["bundle"]);

        let source = factory.source(&class).unwrap();
        assert_eq!(
            source,
            "return fn (...args) => new class(...args) extends Base implements Contract { use Helpers; };"
        );

        // The rendered source parses back to the same shape.
        let shape = parse_unit(&format!("#stub {source}")).unwrap();
        assert_eq!(shape.base(), Some("Base"));
        assert!(shape.implements("Contract"));
        assert!(shape.uses("Helpers"));
    }
}
