//! Testing utilities for the class-factory workspace
//!
//! Shared oracle fixtures and scratch-directory factories.

#![allow(missing_docs)]

use class_factory::{ClassFactory, StaticOracle};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Standard type universe used across integration tests.
pub fn fixture_oracle() -> Arc<StaticOracle> {
    let mut oracle = StaticOracle::new();
    oracle
        .declare_class("SomeClass")
        .declare_class("AbstractBase")
        .declare_interface("SomeInterface")
        .declare_interface("OtherInterface")
        .declare_interface("LoggerAwareInterface")
        .declare_mixin("SomeTrait")
        .declare_mixin("LoggerAwareTrait");
    Arc::new(oracle)
}

/// Factory wired to the fixture oracle with an isolated scratch directory.
///
/// The returned `TempDir` owns the scratch directory; keep it alive for the
/// duration of the test.
pub fn scratch_factory() -> (ClassFactory, TempDir) {
    let scratch = TempDir::new().expect("create scratch dir");
    let mut factory = ClassFactory::new(fixture_oracle());
    factory.set_temp_directory(scratch.path());
    (factory, scratch)
}

/// Number of cached stub files in a scratch directory.
pub fn stub_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .expect("read scratch dir")
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.starts_with("factory-") && name.ends_with(".stub")
        })
        .count()
}
