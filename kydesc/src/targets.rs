//! Annotation applicability surface.
//!
//! Annotation classes declare which syntactic roles they may be applied to
//! (`targets`), how long the attachment survives compilation (`retention`)
//! and, for multiplatform declarations, whether a platform is allowed to
//! leave the annotation class unactualized (`optional_expectation`). This
//! module carries that declared shape plus the mapping from declarations to
//! the roles they satisfy.
use bitflags::bitflags;
use strum::EnumIs;

use crate::{
    descriptors::{AccessorKind, DeclKind, Declaration},
    name::FqName,
};

/// One syntactic role an annotation may be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs)]
pub enum DeclarationTarget {
    Class,
    Property,
    Function,
    PropertyGetter,
    PropertySetter,
    Field,
    ValueParameter,
    File,
}

impl DeclarationTarget {
    pub fn as_flag(self) -> TargetSet {
        match self {
            DeclarationTarget::Class => TargetSet::CLASS,
            DeclarationTarget::Property => TargetSet::PROPERTY,
            DeclarationTarget::Function => TargetSet::FUNCTION,
            DeclarationTarget::PropertyGetter => TargetSet::PROPERTY_GETTER,
            DeclarationTarget::PropertySetter => TargetSet::PROPERTY_SETTER,
            DeclarationTarget::Field => TargetSet::FIELD,
            DeclarationTarget::ValueParameter => TargetSet::VALUE_PARAMETER,
            DeclarationTarget::File => TargetSet::FILE,
        }
    }
}

bitflags! {
    /// A set of [`DeclarationTarget`] roles.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TargetSet: u16 {
        const CLASS = 1;
        const PROPERTY = 1 << 1;
        const FUNCTION = 1 << 2;
        const PROPERTY_GETTER = 1 << 3;
        const PROPERTY_SETTER = 1 << 4;
        const FIELD = 1 << 5;
        const VALUE_PARAMETER = 1 << 6;
        const FILE = 1 << 7;
    }
}

/// How long an annotation attachment is retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIs)]
pub enum Retention {
    /// Visible to the compiler only.
    Source,

    /// Stored in compiled output, invisible to reflection.
    Binary,

    /// Stored in compiled output and visible to reflection.
    #[default]
    Runtime,
}

/// The declared shape of an annotation class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationClassSpec {
    /// Fully-qualified name of the annotation class.
    pub fq_name: FqName,

    /// Roles the annotation may be applied to.
    pub targets: TargetSet,

    pub retention: Retention,

    /// Multiplatform: platforms may omit an actualization of this annotation
    /// class entirely, in which case attachments are erased.
    pub optional_expectation: bool,
}

impl AnnotationClassSpec {
    pub fn new(fq_name: FqName, targets: TargetSet) -> Self {
        AnnotationClassSpec {
            fq_name,
            targets,
            retention: Retention::default(),
            optional_expectation: false,
        }
    }

    pub fn with_retention(mut self, retention: Retention) -> Self {
        self.retention = retention;
        self
    }

    pub fn optionally_expected(mut self) -> Self {
        self.optional_expectation = true;
        self
    }
}

/// The roles a declaration satisfies as an annotation target.
///
/// A property also satisfies the `FIELD` role; this model does not track
/// backing-field existence, so the answer is conservative.
pub fn target_of(decl: &Declaration) -> TargetSet {
    match &decl.kind {
        DeclKind::Package => TargetSet::empty(),
        DeclKind::Class(_) => TargetSet::CLASS,
        DeclKind::Function(_) => TargetSet::FUNCTION,
        DeclKind::Property(_) => TargetSet::PROPERTY | TargetSet::FIELD,
        DeclKind::PropertyAccessor(info) => match info.kind {
            AccessorKind::Getter => TargetSet::PROPERTY_GETTER,
            AccessorKind::Setter => TargetSet::PROPERTY_SETTER,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        annotations::Annotations,
        descriptors::{ClassInfo, ClassKind},
        name::Name,
    };

    #[test]
    fn class_declarations_satisfy_only_the_class_role() {
        let decl = Declaration {
            name: Name::identifier("Box").unwrap(),
            container: None,
            annotations: Annotations::new(),
            kind: DeclKind::Class(ClassInfo::new(ClassKind::Class)),
        };
        assert_eq!(target_of(&decl), TargetSet::CLASS);
        assert!(target_of(&decl).contains(DeclarationTarget::Class.as_flag()));
        assert!(!target_of(&decl).intersects(TargetSet::PROPERTY | TargetSet::FUNCTION));
    }
}
