//! Identifier and fully-qualified name types.
//!
//! Declarations are addressed by dotted paths of segments ([`FqName`]). A
//! segment ([`Name`]) is either an ordinary source-level identifier or a
//! "special" name the front-end synthesizes for declarations that have no
//! identifier of their own (constructors, accessors, anonymous objects).
//! Special names are angle-bracketed so they can never collide with source
//! identifiers.
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::utils::{DescError, DescResult};

/// A single name segment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Name {
    /// Ordinary source-level identifier.
    Identifier(Box<str>),

    /// Synthesized name, always angle-bracketed (eg., `<init>`, `<get-x>`)
    Special(Box<str>),
}

impl Name {
    /// Create an ordinary identifier. Identifiers must be non-empty, dot-free
    /// and must not start with `<`.
    pub fn identifier(text: impl Into<String>) -> DescResult<Self> {
        let text = text.into();
        if text.is_empty() || text.contains('.') || text.starts_with('<') {
            return Err(DescError::InvalidName { text });
        }
        Ok(Name::Identifier(text.into_boxed_str()))
    }

    /// Create a synthesized name. Special names must start with `<`.
    pub fn special(text: impl Into<String>) -> DescResult<Self> {
        let text = text.into();
        if !text.starts_with('<') {
            return Err(DescError::InvalidName { text });
        }
        Ok(Name::Special(text.into_boxed_str()))
    }

    /// The raw text of the name, including angle brackets for special names.
    pub fn as_str(&self) -> &str {
        match self {
            Name::Identifier(text) => text,
            Name::Special(text) => text,
        }
    }

    /// Returns true for synthesized (angle-bracketed) names.
    pub fn is_special(&self) -> bool {
        matches!(self, Name::Special(_))
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dotted path of [`Name`] segments. The root path is empty.
///
/// Only identifier segments can appear inside an `FqName`; declarations named
/// by a special segment (accessors, constructors) have no fully-qualified
/// name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FqName {
    segments: SmallVec<[Name; 4]>,
}

impl FqName {
    /// The empty (root) path.
    pub fn root() -> Self {
        FqName::default()
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path segments, outermost first.
    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    /// The last segment, absent for the root path.
    pub fn short_name(&self) -> Option<&Name> {
        self.segments.last()
    }

    /// The path with the last segment removed, absent for the root path.
    pub fn parent(&self) -> Option<FqName> {
        if self.is_root() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(FqName { segments })
    }

    /// Extend the path by one segment.
    pub fn child(&self, name: Name) -> FqName {
        let mut segments = self.segments.clone();
        segments.push(name);
        FqName { segments }
    }

    /// Returns true if `prefix` is a (non-strict) leading sub-path of `self`.
    pub fn starts_with(&self, prefix: &FqName) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }
}

impl FromStr for FqName {
    type Err = DescError;

    /// Parse a dotted path. The empty string parses to the root path; every
    /// segment must be a valid identifier.
    fn from_str(text: &str) -> DescResult<Self> {
        if text.is_empty() {
            return Ok(FqName::root());
        }
        let segments = text
            .split('.')
            .map(Name::identifier)
            .collect::<DescResult<SmallVec<[Name; 4]>>>()?;
        Ok(FqName { segments })
    }
}

impl std::fmt::Display for FqName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
