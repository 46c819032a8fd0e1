//! Whole-file generation: header, package clause, imports, then every
//! interface's mock in declaration order.

use std::collections::BTreeSet;
use std::io::Write;

use julep_ir::{Interface, Package};

use crate::call::CallEmitter;
use crate::imports::{collect_type_imports, ImportBlock};
use crate::mock::MockEmitter;
use crate::{CodeWriter, Result, TypeRenderer};

const HEADER: &str = "// Code generated by julep; DO NOT EDIT.";

/// Marker type elided from generated argument lists, a context carrier by
/// convention.
const DEFAULT_ELIDED_TYPE: &str = "context.Context";

/// Generates one mock source file per original source file.
///
/// Generation is synchronous, single-pass, and deterministic: the same
/// package and interface descriptors always produce byte-identical output.
/// Import accumulation is scoped to the pass, so generating several
/// packages from the same `Generator` never lets state leak between them.
#[derive(Debug, Clone)]
pub struct Generator {
    elided_type: String,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self {
            elided_type: DEFAULT_ELIDED_TYPE.to_string(),
        }
    }

    /// Override the elided parameter type, matched against rendered
    /// parameter type text.
    pub fn with_elided_type(mut self, ty: impl Into<String>) -> Self {
        self.elided_type = ty.into();
        self
    }

    /// Render the mock file for `interfaces` into `out`.
    ///
    /// The first write failure aborts the rest of the emission and is
    /// returned once; output already written stays as-is (append-only, no
    /// rollback).
    pub fn generate_file<W: Write>(
        &self,
        out: W,
        pkg: &Package,
        interfaces: &[Interface],
    ) -> Result<()> {
        let mut w = CodeWriter::new(out);

        w.line(HEADER);
        w.blank();
        w.line(&format!("package {}", pkg.name));

        let imports = ImportBlock::with_required(self.collect_imports(pkg, interfaces));
        if !imports.is_empty() {
            w.blank();
            imports.emit(&mut w);
        }

        let renderer = TypeRenderer::new(&pkg.path);
        for iface in interfaces {
            let mock = MockEmitter::new(iface, &renderer, &self.elided_type);
            let call = CallEmitter::new(iface, &renderer, &self.elided_type);

            mock.emit_base(&mut w);
            for method in &iface.methods {
                mock.emit_method(&mut w, method);
                mock.emit_on(&mut w, method);
                mock.emit_on_raw(&mut w, method);
                call.emit(&mut w, method);
            }
        }

        w.finish()
    }

    /// Convenience wrapper rendering into a string.
    pub fn generate_to_string(&self, pkg: &Package, interfaces: &[Interface]) -> Result<String> {
        let mut buf = Vec::new();
        self.generate_file(&mut buf, pkg, interfaces)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Union of the discovery-provided import set and every externally
    /// declared named type reachable from the interfaces' signatures.
    fn collect_imports(&self, pkg: &Package, interfaces: &[Interface]) -> BTreeSet<String> {
        let mut paths: BTreeSet<String> = pkg.imports.iter().cloned().collect();
        for iface in interfaces {
            for method in &iface.methods {
                for param in &method.signature.params {
                    collect_type_imports(&param.ty, &pkg.path, &mut paths);
                }
                for result in &method.signature.results {
                    collect_type_imports(&result.ty, &pkg.path, &mut paths);
                }
            }
        }
        paths
    }
}
