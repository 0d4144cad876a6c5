//! Declaration descriptor model for the kyanite front-end.
//!
//! This crate owns the data produced by semantic analysis: declarations
//! (packages, classes, functions, properties, accessors) arranged in a
//! containment tree, the annotations attached to them, and the literal
//! values annotation arguments can carry. Higher layers (see `kyresolve`)
//! only ever read this model; every mutation goes through the
//! [`descriptors::DescriptorArena`] construction API.

pub mod annotations;
pub mod descriptors;
pub mod name;
pub mod targets;
pub mod utils;
pub mod values;
