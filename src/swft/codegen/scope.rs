//! Declared names
//!
//!     Two flat sets, filled in source order while code is emitted. Static names are stored
//!     upper cased, the way they are written out; dynamic names (including function
//!     parameters) are stored as given. A name counts as declared if it is a dynamic name,
//!     or if its upper cased form is a static name.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    statics: BTreeSet<String>,
    dynamics: BTreeSet<String>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a static name, returning the spelling it is emitted with.
    pub fn declare_static(&mut self, name: &str) -> String {
        let upper = name.to_uppercase();
        self.statics.insert(upper.clone());
        upper
    }

    pub fn declare_dynamic(&mut self, name: &str) {
        self.dynamics.insert(name.to_string());
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.dynamics.contains(name) || self.statics.contains(&name.to_uppercase())
    }

    /// The spelling a reference to `name` is emitted with.
    pub fn resolve(&self, name: &str) -> String {
        let upper = name.to_uppercase();
        if !self.dynamics.contains(name) && self.statics.contains(&upper) {
            upper
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_names_match_any_case() {
        let mut scope = Scope::new();
        assert_eq!(scope.declare_static("max"), "MAX");
        assert!(scope.is_declared("max"));
        assert!(scope.is_declared("MAX"));
        assert_eq!(scope.resolve("max"), "MAX");
    }

    #[test]
    fn test_dynamic_names_are_exact() {
        let mut scope = Scope::new();
        scope.declare_dynamic("count");
        assert!(scope.is_declared("count"));
        assert!(!scope.is_declared("Count"));
        assert_eq!(scope.resolve("count"), "count");
        assert_eq!(scope.resolve("other"), "other");
    }
}
