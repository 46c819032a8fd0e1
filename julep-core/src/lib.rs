//! Shared naming utilities for the julep mock generator.
//!
//! Case conversion lives here so every generator crate agrees on how Go
//! identifiers are spelled. The functions are pure and carry no state.

mod naming;

pub use naming::{to_go_camel, to_go_pascal};
