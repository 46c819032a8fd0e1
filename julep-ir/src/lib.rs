//! Interface descriptor types for the julep mock generator.
//!
//! This crate is the contract between interface discovery (which parses Go
//! source and resolves types) and code generation (which renders mock source
//! text). Descriptors are plain data: fully resolved, acyclic type shapes
//! with no reference back to any parser state. Everything derives serde so
//! descriptor sets can cross a process boundary.

mod interface;
mod package;
mod types;

pub use interface::{Interface, Method, Parameter, ReturnValue, Signature, TypeParam};
pub use package::Package;
pub use types::{ChanDir, GoType, PackageRef};
