//! Renders testify-style mock source for Go interfaces.
//!
//! Given fully resolved interface descriptors from `julep-ir`, this crate
//! emits one mock file per original source file: a mock struct embedding
//! `mock.Mock`, a constructor wired to `testing.TB`, a mocked body per
//! method, typed/raw `On` registration entry points, and one fluent
//! call-configuration wrapper per method with cross-method chaining.
//!
//! ```
//! use julep_codegen::Generator;
//! use julep_ir::{GoType, Interface, Method, Package, Parameter, ReturnValue, Signature};
//!
//! let pkg = Package::new("store", "github.com/acme/store");
//! let iface = Interface::new(
//!     "Fetcher",
//!     vec![Method::new(
//!         "Get",
//!         Signature::new(
//!             vec![Parameter::new("id", GoType::basic("string"))],
//!             vec![ReturnValue::unnamed(GoType::basic("error"))],
//!         ),
//!     )],
//! );
//!
//! let code = Generator::new().generate_to_string(&pkg, &[iface]).unwrap();
//! assert!(code.contains("type fetcherMock struct { mock.Mock }"));
//! ```
//!
//! The generator never executes or type-checks its output; the emitted
//! source relies on the testify mock runtime contract. Generation is
//! deterministic: identical descriptors produce byte-identical files.

mod call;
mod error;
mod generator;
mod imports;
mod mock;
mod naming;
mod renderer;
mod signature;
mod writer;

pub use error::{Error, Result};
pub use generator::Generator;
pub use imports::ImportBlock;
pub use renderer::TypeRenderer;
pub use writer::CodeWriter;
