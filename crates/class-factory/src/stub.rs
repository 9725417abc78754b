//! Stub rendering
//!
//! Renders the class-definition source fragment for a set of classified
//! roles. The skeleton is a constructor-returning expression whose clause
//! tokens are substituted per role; a clause with no members renders as the
//! empty string, leaving a valid dependency-free declaration.

/// Prologue marking a persisted/evaluated compilation unit.
/// Plain rendering (stringification) never includes it.
pub(crate) const UNIT_PROLOGUE: &str = "#stub ";

/// Head of the rendered stub, shared with the loader's parser.
pub(crate) const STUB_HEAD: &str = "return fn (...args) => new class(...args)";

const STUB_SKELETON: &str = "{{ head }}{{ extends }}{{ implements }} {{{ uses }}};";

/// Render the stub for the given role buckets.
///
/// Multiple extends-role names are joined with ", " exactly as classified.
/// Single-inheritance rejection of that shape happens at load time, not
/// here; the rendered text records what the caller asked for.
pub(crate) fn render(extends: &[String], implements: &[String], uses: &[String]) -> String {
    let extends_clause = clause(extends, |list| format!(" extends {list}"));
    let implements_clause = clause(implements, |list| format!(" implements {list}"));
    let uses_clause = clause(uses, |list| format!(" use {list}; "));

    STUB_SKELETON
        .replace("{{ head }}", STUB_HEAD)
        .replace("{{ extends }}", &extends_clause)
        .replace("{{ implements }}", &implements_clause)
        .replace("{{ uses }}", &uses_clause)
}

fn clause(names: &[String], format: impl Fn(String) -> String) -> String {
    if names.is_empty() {
        String::new()
    } else {
        format(names.join(", "))
    }
}
