//! Annotations and per-declaration annotation sets.
//!
//! An annotation is identified by the fully-qualified name of its annotation
//! class and carries an ordered list of named arguments. An attachment may be
//! qualified by a use-site target when the annotated declaration materializes
//! as several physical artifacts (a property and its backing field, for
//! instance). [`Annotations`] preserves attachment order; every lookup is a
//! pure read.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::EnumIs;

use crate::{
    name::{FqName, Name},
    values::ConstantValue,
};

/// Qualifier narrowing which physical artifact an annotation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UseSiteTarget {
    Field,
    File,
    Property,
    PropertyGetter,
    PropertySetter,
    Receiver,
    ConstructorParameter,
    SetterParameter,
    PropertyDelegateField,
}

impl UseSiteTarget {
    /// Source-level spelling of the qualifier (`field:`, `get:`, ...).
    pub fn render_name(&self) -> &'static str {
        match self {
            UseSiteTarget::Field => "field",
            UseSiteTarget::File => "file",
            UseSiteTarget::Property => "property",
            UseSiteTarget::PropertyGetter => "get",
            UseSiteTarget::PropertySetter => "set",
            UseSiteTarget::Receiver => "receiver",
            UseSiteTarget::ConstructorParameter => "param",
            UseSiteTarget::SetterParameter => "setparam",
            UseSiteTarget::PropertyDelegateField => "delegate",
        }
    }
}

impl std::fmt::Display for UseSiteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_name())
    }
}

/// A resolved annotation: its class name and named arguments.
///
/// Arguments form an ordered mapping. Duplicate parameter names are
/// representable; lookups that require an unambiguous name (see
/// `kyresolve::annotations::argument_value`) treat duplicates as absence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotationDescriptor {
    /// Fully-qualified name of the annotation class.
    pub fq_name: FqName,

    /// Named arguments in source order.
    pub arguments: Vec<(Name, ConstantValue)>,
}

impl AnnotationDescriptor {
    /// An annotation with no arguments.
    pub fn new(fq_name: FqName) -> Self {
        AnnotationDescriptor {
            fq_name,
            arguments: Vec::new(),
        }
    }

    /// Append one named argument, preserving order.
    pub fn with_argument(mut self, name: Name, value: ConstantValue) -> Self {
        self.arguments.push((name, value));
        self
    }

    /// Iterate over the named arguments in source order.
    pub fn arguments(&self) -> impl Iterator<Item = (&Name, &ConstantValue)> {
        self.arguments.iter().map(|(name, value)| (name, value))
    }
}

/// One attachment of an annotation to a declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotationWithTarget {
    pub annotation: AnnotationDescriptor,

    /// `None` means the annotation was attached with the default target.
    pub target: Option<UseSiteTarget>,
}

/// The ordered annotation collection attached to one declaration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Annotations {
    entries: SmallVec<[AnnotationWithTarget; 2]>,
}

impl Annotations {
    pub fn new() -> Self {
        Annotations::default()
    }

    /// Attach an annotation with the default target.
    pub fn push(&mut self, annotation: AnnotationDescriptor) {
        self.entries.push(AnnotationWithTarget {
            annotation,
            target: None,
        });
    }

    /// Attach an annotation qualified by a use-site target.
    pub fn push_targeted(&mut self, target: UseSiteTarget, annotation: AnnotationDescriptor) {
        self.entries.push(AnnotationWithTarget {
            annotation,
            target: Some(target),
        });
    }

    /// First default-target annotation with the given class name.
    pub fn find(&self, fq_name: &FqName) -> Option<&AnnotationDescriptor> {
        self.entries
            .iter()
            .find(|entry| entry.target.is_none() && entry.annotation.fq_name == *fq_name)
            .map(|entry| &entry.annotation)
    }

    /// First annotation attached with exactly the given use-site target and
    /// class name.
    pub fn find_use_site_targeted(
        &self,
        target: UseSiteTarget,
        fq_name: &FqName,
    ) -> Option<&AnnotationDescriptor> {
        self.entries
            .iter()
            .find(|entry| entry.target == Some(target) && entry.annotation.fq_name == *fq_name)
            .map(|entry| &entry.annotation)
    }

    /// True iff a default-target annotation with the given class name is
    /// attached.
    pub fn has(&self, fq_name: &FqName) -> bool {
        self.find(fq_name).is_some()
    }

    /// Iterate over all attachments in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = &AnnotationWithTarget> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl From<AnnotationDescriptor> for Annotations {
    /// A set holding a single default-target annotation.
    fn from(annotation: AnnotationDescriptor) -> Self {
        let mut annotations = Annotations::new();
        annotations.push(annotation);
        annotations
    }
}

impl FromIterator<AnnotationWithTarget> for Annotations {
    fn from_iter<I: IntoIterator<Item = AnnotationWithTarget>>(entries: I) -> Self {
        Annotations {
            entries: entries.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(text: &str) -> AnnotationDescriptor {
        AnnotationDescriptor::new(text.parse().unwrap())
    }

    #[test]
    fn find_returns_the_first_default_target_match() {
        let mut annotations = Annotations::new();
        annotations.push(
            marker("demo.Tag").with_argument(
                Name::identifier("value").unwrap(),
                ConstantValue::from("first"),
            ),
        );
        annotations.push(
            marker("demo.Tag").with_argument(
                Name::identifier("value").unwrap(),
                ConstantValue::from("second"),
            ),
        );

        let found = annotations.find(&"demo.Tag".parse().unwrap()).unwrap();
        assert_eq!(found.arguments[0].1, ConstantValue::from("first"));
        assert_eq!(annotations.len(), 2);
    }

    #[test]
    fn targeted_and_default_attachments_do_not_shadow_each_other() {
        let fq: FqName = "demo.Tag".parse().unwrap();
        let mut annotations = Annotations::new();
        annotations.push_targeted(UseSiteTarget::Field, marker("demo.Tag"));

        assert!(annotations.find(&fq).is_none());
        assert!(
            annotations
                .find_use_site_targeted(UseSiteTarget::Field, &fq)
                .is_some()
        );
        assert!(
            annotations
                .find_use_site_targeted(UseSiteTarget::PropertyGetter, &fq)
                .is_none()
        );
        assert!(!annotations.has(&fq));
    }
}
