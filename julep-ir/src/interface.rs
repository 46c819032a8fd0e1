//! Interface and method descriptors.

use serde::{Deserialize, Serialize};

use crate::GoType;

/// One method parameter. Position is implied by its index in the signature;
/// unnamed parameters get a deterministic fallback name during generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: Option<String>,
    pub ty: GoType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: GoType) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    pub fn unnamed(ty: GoType) -> Self {
        Self { name: None, ty }
    }
}

/// One method result. Like parameters, unnamed results get deterministic
/// fallback names keyed by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnValue {
    pub name: Option<String>,
    pub ty: GoType,
}

impl ReturnValue {
    pub fn new(name: impl Into<String>, ty: GoType) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    pub fn unnamed(ty: GoType) -> Self {
        Self { name: None, ty }
    }
}

/// Normalized shape of one method.
///
/// If `variadic` is true, the last parameter's type is a slice whose element
/// becomes the rendered `...T` variadic element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signature {
    pub params: Vec<Parameter>,
    pub results: Vec<ReturnValue>,
    pub variadic: bool,
}

impl Signature {
    pub fn new(params: Vec<Parameter>, results: Vec<ReturnValue>) -> Self {
        Self {
            params,
            results,
            variadic: false,
        }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

/// One interface method, in declaration order within its interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub signature: Signature,
}

impl Method {
    pub fn new(name: impl Into<String>, signature: Signature) -> Self {
        Self {
            name: name.into(),
            signature,
        }
    }
}

/// A generic type parameter of an interface, e.g. `T any`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,
    /// Constraint source text, e.g. `any` or `comparable`.
    pub constraint: String,
}

impl TypeParam {
    pub fn new(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
        }
    }
}

/// An interface to mock. Immutable input to generation; method order is the
/// declaration order and is preserved through the generated output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    pub methods: Vec<Method>,
    pub type_params: Vec<TypeParam>,
    /// Drives the constructor prefix (`New` vs `new`).
    pub exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>, methods: Vec<Method>) -> Self {
        let name = name.into();
        let exported = name.chars().next().is_some_and(|c| c.is_uppercase());
        Self {
            name,
            methods,
            type_params: Vec::new(),
            exported,
        }
    }

    pub fn with_type_params(mut self, type_params: Vec<TypeParam>) -> Self {
        self.type_params = type_params;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_from_name() {
        let exported = Interface::new("Fetcher", vec![]);
        assert!(exported.exported);

        let unexported = Interface::new("fetcher", vec![]);
        assert!(!unexported.exported);
    }

    #[test]
    fn test_variadic_builder() {
        let sig = Signature::new(
            vec![Parameter::new(
                "args",
                GoType::Slice(Box::new(GoType::any())),
            )],
            vec![],
        )
        .variadic();
        assert!(sig.variadic);
    }
}
