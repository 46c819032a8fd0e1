//! Recursive rendering of type shapes to Go source text.

use julep_ir::{GoType, PackageRef};

/// Renders [`GoType`] trees to canonical Go type text.
///
/// Rendering is a pure function of the type shape, the tail-position
/// variadic flag, and the package the mock file is generated into (which
/// decides qualified vs. unqualified spelling of named types). Matches are
/// exhaustive over the closed sum, so an unsupported shape is a compile
/// error here rather than invalid generated source.
#[derive(Debug, Clone, Copy)]
pub struct TypeRenderer<'a> {
    package_path: &'a str,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(package_path: &'a str) -> Self {
        Self { package_path }
    }

    /// Render a type. `variadic_tail` is true only when the type is the
    /// final parameter of a variadic signature, turning `[]T` into `...T`;
    /// it never propagates into nested types.
    pub fn render(&self, ty: &GoType, variadic_tail: bool) -> String {
        match ty {
            GoType::Basic(name) => name.clone(),
            GoType::Slice(elem) => {
                let prefix = if variadic_tail { "..." } else { "[]" };
                format!("{}{}", prefix, self.render(elem, false))
            }
            GoType::Map { key, value } => {
                format!(
                    "map[{}]{}",
                    self.render(key, false),
                    self.render(value, false)
                )
            }
            GoType::Named { package, name } => self.render_named(package.as_ref(), name),
            GoType::Pointer(elem) => format!("*{}", self.render(elem, false)),
            GoType::StructLiteral(raw) => raw.clone(),
            GoType::InterfaceLiteral(raw) => raw.clone(),
            GoType::Func { params, results } => {
                let mut out = format!("func({})", self.render_list(params));
                if !results.is_empty() {
                    out.push_str(&format!(" ({})", self.render_list(results)));
                }
                out
            }
            GoType::Chan { dir, elem } => {
                format!("{} {}", dir.keyword(), self.render(elem, false))
            }
            GoType::Array { len, elem } => format!("[{}]{}", len, self.render(elem, false)),
            GoType::TypeParam(name) => name.clone(),
        }
    }

    fn render_named(&self, package: Option<&PackageRef>, name: &str) -> String {
        match package {
            Some(pkg) if pkg.path == self.package_path => name.to_string(),
            Some(pkg) => format!("{}.{}", pkg.name, name),
            // Package metadata unavailable: `name` holds the full type
            // string, keep the portion after the last path separator.
            None => match name.rfind('/') {
                Some(i) => name[i + 1..].to_string(),
                None => name.to_string(),
            },
        }
    }

    fn render_list(&self, types: &[GoType]) -> String {
        types
            .iter()
            .map(|ty| self.render(ty, false))
            .collect::<Vec<_>>()
            .join(",")
    }
}
