//! Materialization: compilation units, class shapes, constructors
//!
//! A rendered stub becomes useful once materialized into a [`Constructor`]:
//! a callable that accepts constructor arguments and produces an [`Instance`]
//! of the synthesized class. The [`Materializer`] trait abstracts the two
//! load paths (cached file vs. in-memory source); [`StubLoader`] is the
//! built-in implementation, which parses the factory's own unit format.

use crate::error::ClassFactoryError;
use crate::stub::{STUB_HEAD, UNIT_PROLOGUE};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The loaded form of a stub: one optional base, interfaces, mixins
///
/// This is what "the host type system at load time" sees; shapes a
/// single-inheritance model cannot express are rejected during parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassShape {
    base: Option<String>,
    interfaces: Vec<String>,
    mixins: Vec<String>,
}

impl ClassShape {
    /// The base class, if any
    #[inline]
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Implemented interfaces in declaration order
    #[inline]
    #[must_use]
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// Included mixin/trait units in declaration order
    #[inline]
    #[must_use]
    pub fn mixins(&self) -> &[String] {
        &self.mixins
    }

    /// Check whether the shape implements the named interface
    #[inline]
    #[must_use]
    pub fn implements(&self, name: &str) -> bool {
        self.interfaces.iter().any(|i| i == name)
    }

    /// Check whether the shape includes the named mixin
    #[inline]
    #[must_use]
    pub fn uses(&self, name: &str) -> bool {
        self.mixins.iter().any(|m| m == name)
    }
}

/// An instance of a synthesized class
///
/// Carries the class shape it was constructed from plus the constructor
/// arguments it was invoked with.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    shape: ClassShape,
    args: Vec<Value>,
}

impl Instance {
    /// Shape of the class this instance belongs to
    #[inline]
    #[must_use]
    pub fn shape(&self) -> &ClassShape {
        &self.shape
    }

    /// Constructor arguments this instance was built with
    #[inline]
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Check whether this instance's class implements the named interface
    #[inline]
    #[must_use]
    pub fn implements(&self, name: &str) -> bool {
        self.shape.implements(name)
    }

    /// Check whether this instance's class includes the named mixin
    #[inline]
    #[must_use]
    pub fn uses(&self, name: &str) -> bool {
        self.shape.uses(name)
    }
}

/// Uniform callable-construction value returned by materialization
///
/// Invoking it with constructor arguments yields a new [`Instance`].
pub type Constructor = Box<dyn Fn(Vec<Value>) -> Instance + Send + Sync>;

/// Pluggable materialization capability
///
/// Both paths must agree: loading a cached unit and evaluating the same
/// unit text in memory produce functionally equivalent constructors.
pub trait Materializer: Send + Sync + std::fmt::Debug {
    /// Load a cached compilation unit from disk and produce its constructor
    ///
    /// # Errors
    /// I/O failure reading the file, or any error `evaluate` can produce.
    fn compile_and_load(&self, path: &Path) -> Result<Constructor, ClassFactoryError>;

    /// Evaluate compilation-unit source text in-process
    ///
    /// # Errors
    /// Malformed unit text, or a shape the type model rejects.
    fn evaluate(&self, unit: &str) -> Result<Constructor, ClassFactoryError>;
}

/// Built-in materializer for the factory's own unit format
///
/// "Compilation" here is parsing the unit back into a [`ClassShape`]; the
/// constructor closes over that shape and records arguments per invocation.
#[derive(Debug, Default, Clone)]
pub struct StubLoader;

impl StubLoader {
    /// Create new stub loader
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Materializer for StubLoader {
    fn compile_and_load(&self, path: &Path) -> Result<Constructor, ClassFactoryError> {
        let unit = fs::read_to_string(path)?;
        self.evaluate(&unit)
    }

    fn evaluate(&self, unit: &str) -> Result<Constructor, ClassFactoryError> {
        let shape = parse_unit(unit)?;
        Ok(Box::new(move |args| Instance {
            shape: shape.clone(),
            args,
        }))
    }
}

/// Parse a compilation unit (prologue + stub) into a class shape
///
/// # Errors
/// `MalformedStub` when the text deviates from the rendered format;
/// `UnsupportedShape` when the extends clause names more than one base.
pub fn parse_unit(unit: &str) -> Result<ClassShape, ClassFactoryError> {
    let stub = unit
        .strip_prefix(UNIT_PROLOGUE)
        .ok_or_else(|| malformed("missing compilation-unit prologue"))?;
    let rest = stub
        .trim_end()
        .strip_prefix(STUB_HEAD)
        .ok_or_else(|| malformed("unrecognized stub head"))?;
    let rest = rest
        .strip_suffix(';')
        .ok_or_else(|| malformed("missing trailing semicolon"))?;

    let open = rest
        .find('{')
        .ok_or_else(|| malformed("missing class body"))?;
    let head = &rest[..open];
    let body = rest[open + 1..]
        .strip_suffix('}')
        .ok_or_else(|| malformed("unterminated class body"))?;

    let (extends_part, implements_part) = match head.find(" implements ") {
        Some(at) => (&head[..at], Some(&head[at + " implements ".len()..])),
        None => (head, None),
    };

    let base = match extends_part.trim() {
        "" => None,
        clause => {
            let list = clause
                .strip_prefix("extends ")
                .ok_or_else(|| malformed("unrecognized inheritance clause"))?;
            let bases = split_names(list);
            if bases.len() > 1 {
                return Err(ClassFactoryError::UnsupportedShape(format!(
                    "multiple base classes: {}",
                    bases.join(", ")
                )));
            }
            bases.into_iter().next()
        }
    };

    let interfaces = implements_part.map(split_names).unwrap_or_default();

    let mixins = match body.trim() {
        "" => Vec::new(),
        statement => {
            let list = statement
                .strip_prefix("use ")
                .and_then(|s| s.strip_suffix(';'))
                .ok_or_else(|| malformed("unrecognized body statement"))?;
            split_names(list)
        }
    };

    Ok(ClassShape {
        base,
        interfaces,
        mixins,
    })
}

fn malformed(reason: &str) -> ClassFactoryError {
    ClassFactoryError::MalformedStub(reason.to_string())
}

fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
