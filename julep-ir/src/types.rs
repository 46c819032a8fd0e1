//! Type shape descriptors.

use serde::{Deserialize, Serialize};

/// The package declaring a named type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRef {
    /// Import path, e.g. `github.com/acme/store`.
    pub path: String,
    /// Package name used to qualify the type, e.g. `store`.
    pub name: String,
}

impl PackageRef {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// Channel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChanDir {
    /// `chan T`
    SendRecv,
    /// `chan<- T`
    SendOnly,
    /// `<-chan T`
    RecvOnly,
}

impl ChanDir {
    /// The channel keyword with its direction arrow.
    pub fn keyword(&self) -> &'static str {
        match self {
            ChanDir::SendRecv => "chan",
            ChanDir::SendOnly => "chan<-",
            ChanDir::RecvOnly => "<-chan",
        }
    }
}

/// Shape of a Go type, as resolved by interface discovery.
///
/// This is a closed sum: rendering matches exhaustively, so a new variant
/// here fails to compile until every renderer handles it. Shapes are acyclic;
/// every composite bottoms out in a `Basic`, `Named`, literal, or
/// `TypeParam` leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GoType {
    /// Predeclared type, e.g. `string`, `int`, `error`.
    Basic(String),
    /// `[]T`
    Slice(Box<GoType>),
    /// `map[K]V`
    Map {
        key: Box<GoType>,
        value: Box<GoType>,
    },
    /// A defined type. `package` is `None` when the declaring package could
    /// not be resolved, in which case `name` holds the full type string.
    Named {
        package: Option<PackageRef>,
        name: String,
    },
    /// `*T`
    Pointer(Box<GoType>),
    /// Anonymous struct, carried as its literal source text.
    StructLiteral(String),
    /// Anonymous interface, carried as its literal source text.
    InterfaceLiteral(String),
    /// `func(...) (...)`
    Func {
        params: Vec<GoType>,
        results: Vec<GoType>,
    },
    /// `chan T`, `chan<- T`, `<-chan T`
    Chan { dir: ChanDir, elem: Box<GoType> },
    /// `[N]T`
    Array { len: u64, elem: Box<GoType> },
    /// A generic type parameter, rendered by its declared name.
    TypeParam(String),
}

impl GoType {
    /// Shorthand for a named type declared in a known package.
    pub fn named(path: impl Into<String>, pkg: impl Into<String>, name: impl Into<String>) -> Self {
        GoType::Named {
            package: Some(PackageRef::new(path, pkg)),
            name: name.into(),
        }
    }

    /// Shorthand for a predeclared type.
    pub fn basic(name: impl Into<String>) -> Self {
        GoType::Basic(name.into())
    }

    /// The empty interface, `interface{}`.
    pub fn any() -> Self {
        GoType::InterfaceLiteral("interface{}".to_string())
    }

    /// True for function-shaped types, which stub registration replaces
    /// with `mock.Anything` (function values are not comparable).
    pub fn is_func(&self) -> bool {
        matches!(self, GoType::Func { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chan_dir_keyword() {
        assert_eq!(ChanDir::SendRecv.keyword(), "chan");
        assert_eq!(ChanDir::SendOnly.keyword(), "chan<-");
        assert_eq!(ChanDir::RecvOnly.keyword(), "<-chan");
    }

    #[test]
    fn test_is_func() {
        let f = GoType::Func {
            params: vec![GoType::basic("string")],
            results: vec![],
        };
        assert!(f.is_func());
        assert!(!GoType::basic("string").is_func());
    }

    #[test]
    fn test_serde_round_trip() {
        let ty = GoType::Map {
            key: Box::new(GoType::basic("string")),
            value: Box::new(GoType::Slice(Box::new(GoType::named(
                "github.com/acme/store",
                "store",
                "Item",
            )))),
        };
        let json = serde_json::to_string(&ty).unwrap();
        let back: GoType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ty);
    }
}
