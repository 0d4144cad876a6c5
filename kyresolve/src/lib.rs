//! Resolution-side helpers over the `kydesc` declaration model.
//!
//! Everything in this crate is a pure read: classification predicates over a
//! declaration's syntactic role, lookups into annotation sets, and
//! applicability checks against the declared shape of well-known annotation
//! classes. No operation errors or panics; missing data (a dangling id, an
//! absent container, an ambiguous argument name) always degrades to `false`
//! or `None`. Callers use these as best-effort classifiers during
//! declaration analysis, not as validators.
//!
//! Queries borrow the arena for the duration of one call only, so a shared
//! `&DescriptorArena` can serve any number of threads.

pub mod annotations;
pub mod applicability;
pub mod classifiers;
pub mod names;
