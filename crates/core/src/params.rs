//! Layered parameter resolution for one command invocation.
//!
//! A [`Params`] store is built fresh for every invocation from whatever the
//! host CLI engine resolved, and is destroyed when the invocation ends.
//! Lookups go through three layers in precedence order:
//!
//! 1. **Overrides** — set programmatically (commonly by middleware), highest
//!    precedence
//! 2. **Named options**
//! 3. **Positional arguments**
//!
//! Resolution is about *presence*, not truthiness: a declared option whose
//! value is absent falls through to the next layer instead of short-circuiting
//! with an empty value.

use indexmap::IndexMap;

/// The resolved parameters of a single command invocation.
#[derive(Debug, Clone, Default)]
pub struct Params {
    arguments: IndexMap<String, Option<String>>,
    options: IndexMap<String, Option<String>>,
    overrides: IndexMap<String, String>,
}

impl Params {
    /// Builds a store from the engine-resolved values. Each declared argument
    /// and option appears as a key; a `None` value means the parameter was
    /// declared but nothing resolved for it.
    #[must_use]
    pub fn new(
        arguments: IndexMap<String, Option<String>>,
        options: IndexMap<String, Option<String>>,
    ) -> Self {
        Self {
            arguments,
            options,
            overrides: IndexMap::new(),
        }
    }

    /// Returns the value for `name`, checking overrides, then options, then
    /// arguments. Falls back to `default` when no layer has a present value.
    #[must_use]
    pub fn get(&self, name: &str, default: &str) -> String {
        if let Some(value) = self.overrides.get(name) {
            return value.clone();
        }

        if let Some(Some(value)) = self.options.get(name) {
            return value.clone();
        }

        if let Some(Some(value)) = self.arguments.get(name) {
            return value.clone();
        }

        default.to_string()
    }

    /// True if any layer recognizes `name`, independent of whether a value is
    /// present for it.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
            || self.options.contains_key(name)
            || self.arguments.contains_key(name)
    }

    /// Inserts or replaces an override. Overrides shadow option and argument
    /// values for the remainder of the invocation.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(name.into(), value.into());
    }

    /// Removes an override only; underlying option and argument values are
    /// untouched.
    pub fn unset(&mut self, name: &str) {
        self.overrides.shift_remove(name);
    }

    /// Flattens the store into a single name → value map: arguments first,
    /// then options, then overrides, with later layers overwriting earlier
    /// keys. Declared parameters without a present value are omitted.
    #[must_use]
    pub fn all(&self) -> IndexMap<String, String> {
        let mut merged: IndexMap<String, String> = IndexMap::new();

        for (name, value) in &self.arguments {
            if let Some(value) = value {
                merged.insert(name.clone(), value.clone());
            }
        }

        for (name, value) in &self.options {
            if let Some(value) = value {
                merged.insert(name.clone(), value.clone());
            }
        }

        for (name, value) in &self.overrides {
            merged.insert(name.clone(), value.clone());
        }

        merged
    }

    /// Discards all current overrides and replaces them wholesale. Underlying
    /// argument and option values are untouched.
    pub fn replace_all(&mut self, overrides: IndexMap<String, String>) {
        self.overrides = overrides;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Params {
        let mut arguments = IndexMap::new();
        arguments.insert("source".to_string(), Some("a".to_string()));
        arguments.insert("target".to_string(), None);

        let mut options = IndexMap::new();
        options.insert("batch".to_string(), Some("10".to_string()));
        options.insert("dry-run".to_string(), None);

        Params::new(arguments, options)
    }

    #[test]
    fn test_get_reads_arguments_and_options() {
        let params = store();

        assert_eq!(params.get("source", ""), "a");
        assert_eq!(params.get("batch", ""), "10");
    }

    #[test]
    fn test_get_falls_back_to_default_for_undeclared_name() {
        let params = store();
        assert_eq!(params.get("missing", "fallback"), "fallback");
    }

    #[test]
    fn test_override_shadows_underlying_value() {
        let mut params = store();
        params.set("source", "b");

        assert_eq!(params.get("source", "anything"), "b");
    }

    #[test]
    fn test_unset_restores_underlying_value() {
        let mut params = store();
        params.set("source", "b");
        params.unset("source");

        assert_eq!(params.get("source", ""), "a");
    }

    #[test]
    fn test_absent_value_falls_through_not_short_circuits() {
        let mut params = store();
        // `target` is declared but unresolved; presence alone must not win.
        assert_eq!(params.get("target", "fallback"), "fallback");

        // A declared-but-absent option with the same name as a present
        // argument falls through to the argument layer.
        let mut options = IndexMap::new();
        options.insert("source".to_string(), None);
        let mut arguments = IndexMap::new();
        arguments.insert("source".to_string(), Some("from-argument".to_string()));
        params = Params::new(arguments, options);

        assert_eq!(params.get("source", ""), "from-argument");
    }

    #[test]
    fn test_has_is_about_declaration_not_value() {
        let params = store();

        assert!(params.has("target"));
        assert!(params.has("dry-run"));
        assert!(!params.has("missing"));
    }

    #[test]
    fn test_has_sees_overrides() {
        let mut params = store();
        params.set("computed", "yes");

        assert!(params.has("computed"));
    }

    #[test]
    fn test_all_merges_in_precedence_order() {
        let mut params = store();
        params.set("batch", "25");
        params.set("computed", "yes");

        let all = params.all();
        assert_eq!(all.get("source"), Some(&"a".to_string()));
        assert_eq!(all.get("batch"), Some(&"25".to_string()));
        assert_eq!(all.get("computed"), Some(&"yes".to_string()));
        // Declared-but-absent parameters are omitted from the flat view.
        assert!(!all.contains_key("target"));
        assert!(!all.contains_key("dry-run"));
    }

    #[test]
    fn test_replace_all_swaps_only_the_override_layer() {
        let mut params = store();
        params.set("source", "b");

        let mut replacement = IndexMap::new();
        replacement.insert("batch".to_string(), "99".to_string());
        params.replace_all(replacement);

        // The previous override is gone, the new one applies, and the
        // underlying layers still resolve.
        assert_eq!(params.get("source", ""), "a");
        assert_eq!(params.get("batch", ""), "99");
    }
}
