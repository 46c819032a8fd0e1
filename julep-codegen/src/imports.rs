//! Import accumulation and the deterministic import block.

use std::collections::BTreeSet;
use std::io::Write;

use julep_ir::GoType;

use crate::CodeWriter;

/// Paths every generated file needs regardless of its interfaces: the
/// test-context handle, the time-gated fluent methods, and the call
/// recorder itself.
const REQUIRED_IMPORTS: &[&str] = &["testing", "time", "github.com/stretchr/testify/mock"];

/// A sorted, grouped Go import block.
///
/// Standard-library-style paths (no dot) come first, then a blank separator,
/// then third-party paths, each group alphabetical. Grouping by insertion
/// order never leaks through: the block is a pure function of the path set.
#[derive(Debug, Clone)]
pub struct ImportBlock {
    std: Vec<String>,
    external: Vec<String>,
}

impl ImportBlock {
    pub fn new(paths: impl IntoIterator<Item = String>) -> Self {
        let set: BTreeSet<String> = paths.into_iter().filter(|p| !p.is_empty()).collect();
        let (external, std) = set.into_iter().partition(|p| p.contains('.'));
        Self { std, external }
    }

    /// Build a block that also carries the forced collaborator imports.
    pub fn with_required(paths: impl IntoIterator<Item = String>) -> Self {
        Self::new(
            paths
                .into_iter()
                .chain(REQUIRED_IMPORTS.iter().map(|p| (*p).to_string())),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.std.is_empty() && self.external.is_empty()
    }

    /// Emit the `import ( ... )` block; emits nothing when the set is empty.
    pub fn emit<W: Write>(&self, w: &mut CodeWriter<W>) {
        if self.is_empty() {
            return;
        }
        w.line("import (").indent();
        for path in &self.std {
            w.line(&format!("\"{}\"", path));
        }
        if !self.std.is_empty() && !self.external.is_empty() {
            w.blank();
        }
        for path in &self.external {
            w.line(&format!("\"{}\"", path));
        }
        w.dedent().line(")");
    }
}

/// Accumulate the import paths referenced by a type shape: every named type
/// declared outside the current package contributes its package path.
pub(crate) fn collect_type_imports(ty: &GoType, current_path: &str, acc: &mut BTreeSet<String>) {
    match ty {
        GoType::Basic(_) | GoType::TypeParam(_) => {}
        // Literal text is emitted verbatim and never decomposed.
        GoType::StructLiteral(_) | GoType::InterfaceLiteral(_) => {}
        GoType::Named { package, .. } => {
            if let Some(pkg) = package {
                if !pkg.path.is_empty() && pkg.path != current_path {
                    acc.insert(pkg.path.clone());
                }
            }
        }
        GoType::Slice(elem) | GoType::Pointer(elem) => {
            collect_type_imports(elem, current_path, acc);
        }
        GoType::Map { key, value } => {
            collect_type_imports(key, current_path, acc);
            collect_type_imports(value, current_path, acc);
        }
        GoType::Func { params, results } => {
            for ty in params.iter().chain(results) {
                collect_type_imports(ty, current_path, acc);
            }
        }
        GoType::Chan { elem, .. } => collect_type_imports(elem, current_path, acc),
        GoType::Array { elem, .. } => collect_type_imports(elem, current_path, acc),
    }
}
