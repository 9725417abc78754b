//! Generic class: dependency list, template expansion, role classification
//!
//! [`GenericClass`] is the one domain entity: an ordered, deduplicated
//! sequence of dependency names. [`Terminals`] walks that sequence lazily,
//! expanding template references depth-first; [`Classified`] layers type
//! introspection on top to bucket each terminal into its role.

use crate::error::ClassFactoryError;
use crate::oracle::{TypeKind, TypeOracle};
use crate::registry::TemplateRegistry;
use indexmap::IndexSet;

/// An ordered, deduplicated dependency-name sequence
///
/// Names may denote loadable types or registered templates; templates are
/// resolved only during expansion, never at construction. The list has set
/// semantics layered on first-seen order: duplicates in the input collapse
/// to the first occurrence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenericClass {
    dependencies: IndexSet<String>,
}

impl GenericClass {
    /// Construct from zero or more dependency names, deduplicating
    #[must_use]
    pub fn new<I, S>(dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut class = Self::default();
        class.add_dependency(dependencies);
        class
    }

    /// Append dependency names, skipping any already present
    pub fn add_dependency<I, S>(&mut self, dependencies: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dependency in dependencies {
            self.dependencies.insert(dependency.into());
        }
        self
    }

    /// The stored (top-level, pre-expansion) dependency names in order
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(String::as_str)
    }

    /// Lazily expand template references into terminal dependency names
    ///
    /// Depth-first: a name registered as a template yields that template's
    /// own expansion in stored order; any other name yields itself. Each
    /// call restarts the traversal from scratch. Duplicates introduced by
    /// different template expansions are not collapsed here. Cyclic template
    /// chains recurse without bound.
    #[must_use]
    pub fn terminals<'a>(&'a self, templates: &'a TemplateRegistry) -> Terminals<'a> {
        Terminals {
            templates,
            stack: vec![self.dependencies.iter()],
        }
    }

    /// Total number of terminal dependencies (drains the expansion)
    #[must_use]
    pub fn count(&self, templates: &TemplateRegistry) -> usize {
        self.terminals(templates).count()
    }

    /// Classify every terminal dependency via the oracle
    ///
    /// Yields `(kind, name)` per terminal, or an unresolved-dependency error
    /// for a name the oracle does not know. Re-runs the full expansion on
    /// each call; nothing is cached across accesses.
    #[must_use]
    pub fn classified<'a>(
        &'a self,
        templates: &'a TemplateRegistry,
        oracle: &'a dyn TypeOracle,
    ) -> Classified<'a> {
        Classified {
            terminals: self.terminals(templates),
            oracle,
        }
    }

    /// Terminal dependencies classified as base classes
    ///
    /// # Errors
    /// Fails if any terminal dependency does not resolve to a known type.
    pub fn extends(
        &self,
        templates: &TemplateRegistry,
        oracle: &dyn TypeOracle,
    ) -> Result<Vec<String>, ClassFactoryError> {
        self.role_members(templates, oracle, TypeKind::Class)
    }

    /// Terminal dependencies classified as interfaces
    ///
    /// # Errors
    /// Fails if any terminal dependency does not resolve to a known type.
    pub fn implements(
        &self,
        templates: &TemplateRegistry,
        oracle: &dyn TypeOracle,
    ) -> Result<Vec<String>, ClassFactoryError> {
        self.role_members(templates, oracle, TypeKind::Interface)
    }

    /// Terminal dependencies classified as mixin/trait units
    ///
    /// # Errors
    /// Fails if any terminal dependency does not resolve to a known type.
    pub fn uses(
        &self,
        templates: &TemplateRegistry,
        oracle: &dyn TypeOracle,
    ) -> Result<Vec<String>, ClassFactoryError> {
        self.role_members(templates, oracle, TypeKind::Mixin)
    }

    fn role_members(
        &self,
        templates: &TemplateRegistry,
        oracle: &dyn TypeOracle,
        role: TypeKind,
    ) -> Result<Vec<String>, ClassFactoryError> {
        self.classified(templates, oracle)
            .filter_map(|entry| match entry {
                Ok((kind, name)) if kind == role => Some(Ok(name.to_string())),
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            })
            .collect()
    }
}

/// Lazy depth-first expansion of a dependency list into terminal names
///
/// Holds one frame per template currently being expanded. No cycle
/// detection: self-referential templates loop until resources run out.
#[derive(Debug)]
pub struct Terminals<'a> {
    templates: &'a TemplateRegistry,
    stack: Vec<indexmap::set::Iter<'a, String>>,
}

impl<'a> Iterator for Terminals<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.last_mut() {
            match frame.next() {
                Some(name) => {
                    if let Some(template) = self.templates.get(name) {
                        self.stack.push(template.dependencies.iter());
                    } else {
                        return Some(name.as_str());
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Terminal names paired with their introspected role
#[derive(Debug)]
pub struct Classified<'a> {
    terminals: Terminals<'a>,
    oracle: &'a dyn TypeOracle,
}

impl<'a> Iterator for Classified<'a> {
    type Item = Result<(TypeKind, &'a str), ClassFactoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.terminals.next()?;
        Some(match self.oracle.kind_of(name) {
            Some(kind) => Ok((kind, name)),
            None => Err(ClassFactoryError::unresolved(name)),
        })
    }
}
