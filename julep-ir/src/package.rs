//! Source package descriptor.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The package a mock file is generated for.
///
/// Built once per source file by interface discovery and shared by every
/// interface in that file. `imports` seeds the generated import block with
/// paths discovery already knows about; generation adds the paths it finds
/// on externally-qualified named types and orders the union
/// deterministically at emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package name used in the `package` clause.
    pub name: String,
    /// Import path of the package, used to decide qualified vs. unqualified
    /// rendering of named types.
    pub path: String,
    /// Import paths required by the interfaces in this file.
    pub imports: IndexSet<String>,
}

impl Package {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            imports: IndexSet::new(),
        }
    }

    pub fn with_import(mut self, path: impl Into<String>) -> Self {
        self.imports.insert(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_import_dedups() {
        let pkg = Package::new("store", "github.com/acme/store")
            .with_import("time")
            .with_import("time");
        assert_eq!(pkg.imports.len(), 1);
    }
}
