//! End-to-end properties of generated mock files.

use std::io::{self, Write};

use julep_codegen::Generator;
use julep_ir::{GoType, Interface, Method, Package, Parameter, ReturnValue, Signature};

fn generate(pkg: &Package, interfaces: &[Interface]) -> String {
    Generator::new()
        .generate_to_string(pkg, interfaces)
        .expect("generation failed")
}

fn logger() -> Interface {
    Interface::new(
        "Logger",
        vec![Method::new(
            "Log",
            Signature::new(
                vec![
                    Parameter::new("tag", GoType::basic("string")),
                    Parameter::new("args", GoType::Slice(Box::new(GoType::any()))),
                ],
                vec![ReturnValue::unnamed(GoType::basic("error"))],
            )
            .variadic(),
        )],
    )
}

#[test]
fn test_variadic_method_spreads_everywhere_it_should() {
    let pkg = Package::new("logging", "github.com/acme/logging");
    let code = generate(&pkg, &[logger()]);

    // Signature spells the tail `...`, the recorder gets the slice as one
    // value, and the detected function-valued return gets the spread.
    assert!(code.contains("func (_m *loggerMock) Log(tag string, args ...interface{}) error {"));
    assert!(code.contains("\t_ret := _m.Called(tag, args)"));
    assert!(code.contains("\t\treturn _rf(tag, args...)"));

    // TypedRun extracts the trailing slice and spreads it into the callback.
    assert!(code.contains("\t\t_args, _ := args.Get(1).([]interface{})"));
    assert!(code.contains("\t\tfn(_tag, _args...)"));
}

#[test]
fn test_zero_result_method_has_no_result_machinery() {
    let pkg = Package::new("demo", "github.com/acme/demo");
    let iface = Interface::new(
        "Closer",
        vec![Method::new("Close", Signature::new(vec![], vec![]))],
    );
    let code = generate(&pkg, &[iface]);

    assert!(!code.contains("_ret"));
    assert!(!code.contains("TypedReturns"));
    assert!(!code.contains("ReturnsFn"));
}

#[test]
fn test_cross_method_chaining_forwards_to_direct_entry_point() {
    let pkg = Package::new("store", "github.com/acme/store");
    let iface = Interface::new(
        "Store",
        vec![
            Method::new(
                "Save",
                Signature::new(
                    vec![Parameter::new("key", GoType::basic("string"))],
                    vec![ReturnValue::unnamed(GoType::basic("error"))],
                ),
            ),
            Method::new(
                "Load",
                Signature::new(
                    vec![Parameter::new("key", GoType::basic("string"))],
                    vec![
                        ReturnValue::unnamed(GoType::basic("string")),
                        ReturnValue::unnamed(GoType::basic("error")),
                    ],
                ),
            ),
        ],
    );
    let code = generate(&pkg, &[iface]);

    // Save's wrapper exposes Load registration and vice versa, both
    // returning the same wrapper type the direct entry point returns.
    assert!(code.contains("func (_c *storeSaveCall) OnLoad(key string) *storeLoadCall {"));
    assert!(code.contains("\treturn _c.Parent.OnLoad(key)"));
    assert!(code.contains("func (_c *storeLoadCall) OnSave(key string) *storeSaveCall {"));
    assert!(code.contains("\treturn _c.Parent.OnSave(key)"));
    assert!(code.contains("func (_c *storeSaveCall) OnLoadRaw(key interface{}) *storeLoadCall {"));
    assert!(code.contains("\treturn _c.Parent.OnLoadRaw(key)"));
}

#[test]
fn test_elided_context_counts_for_later_positions() {
    let pkg = Package::new("store", "github.com/acme/store");
    let iface = Interface::new(
        "Saver",
        vec![Method::new(
            "Save",
            Signature::new(
                vec![
                    Parameter::new("ctx", GoType::named("context", "context", "Context")),
                    Parameter::new("key", GoType::basic("string")),
                    Parameter::new("value", GoType::any()),
                ],
                vec![],
            ),
        )],
    );
    let code = generate(&pkg, &[iface]);

    assert!(code.contains("func (_m *saverMock) Save(_ context.Context, key string, value interface{}) {"));
    assert!(code.contains("\t_m.Called(key, value)"));
    assert!(code.contains("func (_m *saverMock) OnSave(key string, value interface{}) *saverSaveCall {"));
    // Recorded positions start at the first non-elided argument.
    assert!(code.contains("\t\t_key := args.String(0)"));
    assert!(code.contains("\t\t_value, _ := args.Get(1).(interface{})"));
}

#[test]
fn test_generation_is_byte_identical_across_runs() {
    let pkg = Package::new("logging", "github.com/acme/logging").with_import("net/url");
    let interfaces = [logger()];

    let first = generate(&pkg, &interfaces);
    let second = generate(&pkg, &interfaces);
    assert_eq!(first, second);
}

#[test]
fn test_multiple_interfaces_in_declaration_order() {
    let pkg = Package::new("demo", "github.com/acme/demo");
    let first = Interface::new(
        "Alpha",
        vec![Method::new("Do", Signature::new(vec![], vec![]))],
    );
    let second = Interface::new(
        "Beta",
        vec![Method::new("Do", Signature::new(vec![], vec![]))],
    );
    let code = generate(&pkg, &[first, second]);

    let alpha = code.find("type alphaMock struct").unwrap();
    let beta = code.find("type betaMock struct").unwrap();
    assert!(alpha < beta);
}

/// Sink that fails after a fixed byte budget.
struct TruncatingSink {
    budget: usize,
}

impl Write for TruncatingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.budget {
            return Err(io::Error::other("disk full"));
        }
        self.budget -= buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_first_write_failure_is_reported_once() {
    let pkg = Package::new("demo", "github.com/acme/demo");
    let iface = Interface::new(
        "Pinger",
        vec![Method::new("Ping", Signature::new(vec![], vec![]))],
    );

    let result = Generator::new().generate_file(TruncatingSink { budget: 64 }, &pkg, &[iface]);
    assert!(result.is_err());
}
