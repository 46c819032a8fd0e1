//! Names of generated symbols.

use julep_core::{to_go_camel, to_go_pascal};
use julep_ir::{Interface, Method, TypeParam};

/// Mock struct name, always unexported: `fetcherMock`.
pub(crate) fn mock_name(iface: &Interface) -> String {
    format!("{}Mock", to_go_camel(&iface.name))
}

/// Call-wrapper type name for one method: `fetcherGetCall`.
pub(crate) fn call_name(iface: &Interface, method: &Method) -> String {
    format!("{}{}Call", to_go_camel(&iface.name), method.name)
}

/// Constructor name; the prefix follows the interface's exported-ness.
pub(crate) fn constructor_name(iface: &Interface) -> String {
    let prefix = if iface.exported { "New" } else { "new" };
    format!("{}{}Mock", prefix, to_go_pascal(&iface.name))
}

/// Type-parameter declaration list: `[T any, U comparable]`, or empty.
/// Threaded through every generated type declaration.
pub(crate) fn type_params_decl(params: &[TypeParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let decls: Vec<String> = params
        .iter()
        .map(|p| format!("{} {}", p.name, p.constraint))
        .collect();
    format!("[{}]", decls.join(", "))
}

/// Type-parameter usage list: `[T, U]`, or empty. Threaded through every
/// receiver, return type, and instantiation.
pub(crate) fn type_params_use(params: &[TypeParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_and_constructor_names() {
        let exported = Interface::new("Fetcher", vec![]);
        assert_eq!(mock_name(&exported), "fetcherMock");
        assert_eq!(constructor_name(&exported), "NewFetcherMock");

        let unexported = Interface::new("fetcher", vec![]);
        assert_eq!(mock_name(&unexported), "fetcherMock");
        assert_eq!(constructor_name(&unexported), "newFetcherMock");
    }

    #[test]
    fn test_call_name() {
        let iface = Interface::new("Fetcher", vec![]);
        let method = Method::new("Get", Default::default());
        assert_eq!(call_name(&iface, &method), "fetcherGetCall");
    }

    #[test]
    fn test_type_params() {
        assert_eq!(type_params_decl(&[]), "");
        assert_eq!(type_params_use(&[]), "");

        let params = vec![
            TypeParam::new("T", "any"),
            TypeParam::new("U", "comparable"),
        ];
        assert_eq!(type_params_decl(&params), "[T any, U comparable]");
        assert_eq!(type_params_use(&params), "[T, U]");
    }
}
