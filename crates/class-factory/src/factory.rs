//! Class factory: wiring, stub cache, materialization
//!
//! [`ClassFactory`] owns the template registry, the scratch-directory and
//! eval-mode configuration, the type oracle, and the materializer. It is an
//! explicitly constructed value handed to callers; per-test registries are
//! just separate factories.

use crate::class::GenericClass;
use crate::error::ClassFactoryError;
use crate::hash::ContentHash;
use crate::loader::{Constructor, Instance, Materializer, StubLoader};
use crate::oracle::TypeOracle;
use crate::registry::{FactoryConfig, TemplateRegistry};
use crate::stub::{self, UNIT_PROLOGUE};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Factory for synthesized generic classes
#[derive(Debug)]
pub struct ClassFactory {
    templates: TemplateRegistry,
    temp_dir: Option<PathBuf>,
    use_eval: bool,
    oracle: Arc<dyn TypeOracle>,
    materializer: Box<dyn Materializer>,
}

impl ClassFactory {
    /// Create a factory with the given type oracle and the built-in loader
    #[must_use]
    pub fn new(oracle: Arc<dyn TypeOracle>) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            temp_dir: None,
            use_eval: false,
            oracle,
            materializer: Box::new(StubLoader::new()),
        }
    }

    /// Replace the materializer (builder style)
    #[must_use]
    pub fn with_materializer(mut self, materializer: Box<dyn Materializer>) -> Self {
        self.materializer = materializer;
        self
    }

    /// Build a factory from startup configuration
    ///
    /// Replays the host boot sequence: scratch directory, eval flag, then
    /// every configured template in order.
    #[must_use]
    pub fn from_config(config: FactoryConfig, oracle: Arc<dyn TypeOracle>) -> Self {
        let mut factory = Self::new(oracle);
        if let Some(dir) = config.temp_dir {
            factory.set_temp_directory(dir);
        }
        factory.use_eval(config.use_eval);
        for (name, dependencies) in config.templates {
            factory.set_template(name, dependencies);
        }
        factory
    }

    /// Register a template, overwriting any prior entry with the same name
    pub fn set_template<I, S>(&mut self, name: impl Into<String>, dependencies: I) -> &GenericClass
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        tracing::debug!("Registering template `{}`", name);
        self.templates.set(name, dependencies)
    }

    /// Look up a registered template
    #[inline]
    #[must_use]
    pub fn template(&self, name: &str) -> Option<&GenericClass> {
        self.templates.get(name)
    }

    /// The template registry
    #[inline]
    #[must_use]
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// The type oracle used for role classification
    #[inline]
    #[must_use]
    pub fn oracle(&self) -> &dyn TypeOracle {
        &*self.oracle
    }

    /// Scratch path joined with a relative segment
    ///
    /// Falls back to the host's default temporary directory when no scratch
    /// directory has been configured.
    #[must_use]
    pub fn temp_path(&self, relative: &str) -> PathBuf {
        let base = self
            .temp_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);
        if relative.is_empty() {
            base
        } else {
            base.join(relative)
        }
    }

    /// Configure the scratch directory for cached stubs
    pub fn set_temp_directory(&mut self, dir: impl Into<PathBuf>) {
        self.temp_dir = Some(dir.into());
    }

    /// Whether materialization evaluates source in-process
    #[inline]
    #[must_use]
    pub fn is_using_eval(&self) -> bool {
        self.use_eval
    }

    /// Toggle in-process evaluation of rendered source
    pub fn use_eval(&mut self, use_eval: bool) {
        self.use_eval = use_eval;
    }

    /// Render the class-definition source for a generic class
    ///
    /// Runs expansion, classification, and rendering from scratch; the
    /// compilation-unit prologue is not included.
    ///
    /// # Errors
    /// Fails if any terminal dependency does not resolve to a known type.
    pub fn source(&self, class: &GenericClass) -> Result<String, ClassFactoryError> {
        let extends = class.extends(&self.templates, &*self.oracle)?;
        let implements = class.implements(&self.templates, &*self.oracle)?;
        let uses = class.uses(&self.templates, &*self.oracle)?;
        Ok(stub::render(&extends, &implements, &uses))
    }

    /// Materialize a generic class into a callable constructor
    ///
    /// Renders the stub, persists it under its content hash in the scratch
    /// directory (an existing file is reused, never rewritten), then either
    /// evaluates the in-memory unit (eval mode) or compiles the cached file.
    ///
    /// # Errors
    /// Dependency resolution failures, scratch-file I/O errors, and load
    /// errors from the materializer.
    pub fn materialize(&self, class: &GenericClass) -> Result<Constructor, ClassFactoryError> {
        let unit = format!("{}{}", UNIT_PROLOGUE, self.source(class)?);
        let hash = ContentHash::compute(unit.as_bytes());
        let path = self.temp_path(&format!("factory-{hash}.stub"));

        if path.exists() {
            tracing::debug!("Reusing cached stub {}", hash.short());
        } else {
            write_atomic(&path, &unit)?;
            tracing::debug!("Cached stub {} at {}", hash.short(), path.display());
        }

        if self.use_eval {
            tracing::debug!("Materializing stub {} via eval", hash.short());
            self.materializer.evaluate(&unit)
        } else {
            tracing::debug!("Materializing stub {} from cache file", hash.short());
            self.materializer.compile_and_load(&path)
        }
    }

    /// Materialize and invoke with constructor arguments
    ///
    /// # Errors
    /// Everything `materialize` can fail with.
    pub fn construct(
        &self,
        class: &GenericClass,
        args: Vec<Value>,
    ) -> Result<Instance, ClassFactoryError> {
        let constructor = self.materialize(class)?;
        Ok(constructor(args))
    }
}

/// Write via temp-file-then-rename so a concurrent reader of the target
/// path never observes a partially written unit.
fn write_atomic(path: &Path, contents: &str) -> Result<(), ClassFactoryError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
