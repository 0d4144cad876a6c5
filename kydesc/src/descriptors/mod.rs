//! Declaration descriptors.
//!
//! Every named entity produced by semantic analysis is represented as a
//! [`Declaration`] stored in a [`DescriptorArena`]:
//!
//! - `Package`: a namespace segment, containing other declarations
//! - `Class`: classes, interfaces, enums, annotation classes and objects
//! - `Function`: callable members and top-level functions
//! - `Property`: value/variable members with an optional pair of accessors
//! - `PropertyAccessor`: a getter or setter, linked to its property
//!
//! Declarations form a containment tree through their `container` link.
//! Analysis layers walk this tree and inspect annotation sets but never
//! mutate them; all construction goes through the arena API.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumDiscriminants, EnumIs, EnumTryAs};

use crate::{annotations::Annotations, name::FqName, name::Name};

pub mod arena;

pub use arena::{DeclId, DescriptorArena};

/// The flavor of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClassKind {
    Class,
    Interface,
    EnumClass,
    EnumEntry,
    AnnotationClass,
    Object,
}

/// Which accessor of a property a declaration is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AccessorKind {
    Getter,
    Setter,
}

impl AccessorKind {
    pub fn describe(&self) -> &'static str {
        match self {
            AccessorKind::Getter => "getter",
            AccessorKind::Setter => "setter",
        }
    }
}

impl std::fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A nominal type reference appearing in declaration signatures.
///
/// Signature surface only; the descriptor model performs no type checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeRef {
    /// Fully-qualified name of the referenced classifier.
    pub class_name: FqName,

    /// Whether the type is marked nullable.
    pub nullable: bool,

    /// Type arguments, in declaration order.
    pub arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// A non-nullable reference with no type arguments.
    pub fn nominal(class_name: FqName) -> Self {
        TypeRef {
            class_name,
            nullable: false,
            arguments: Vec::new(),
        }
    }

    /// The same reference, marked nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class_name)?;
        if !self.arguments.is_empty() {
            write!(f, "<")?;
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", argument)?;
            }
            write!(f, ">")?;
        }
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// Class-specific declaration data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassInfo {
    pub kind: ClassKind,

    /// Only meaningful for [`ClassKind::Object`]: whether the object is the
    /// companion of its containing class.
    pub is_companion: bool,
}

impl ClassInfo {
    pub fn new(kind: ClassKind) -> Self {
        ClassInfo {
            kind,
            is_companion: false,
        }
    }

    /// A companion object.
    pub fn companion() -> Self {
        ClassInfo {
            kind: ClassKind::Object,
            is_companion: true,
        }
    }
}

/// Function-specific declaration data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionInfo {
    /// Value parameters as `(name, type)` pairs, in declaration order.
    pub params: Vec<(Name, TypeRef)>,

    /// `None` indicates a unit-returning function.
    pub return_type: Option<TypeRef>,
}

/// Property-specific declaration data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyInfo {
    pub ty: TypeRef,

    /// `true` for mutable (`var`) properties.
    pub is_var: bool,

    /// Accessor back-links, filled in by [`DescriptorArena::add_accessor`].
    pub getter: Option<DeclId>,
    pub setter: Option<DeclId>,
}

/// Accessor-specific declaration data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccessorInfo {
    pub kind: AccessorKind,

    /// The property this accessor belongs to.
    pub property: DeclId,
}

/// Kind-specific payload of a declaration.
#[derive(Debug, Clone, PartialEq, EnumIs, EnumTryAs, EnumDiscriminants)]
#[strum_discriminants(name(DeclKindTag))]
#[strum_discriminants(derive(EnumIs))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", strum_discriminants(derive(Serialize, Deserialize)))]
pub enum DeclKind {
    Package,
    Class(ClassInfo),
    Function(FunctionInfo),
    Property(PropertyInfo),
    PropertyAccessor(AccessorInfo),
}

impl DeclKindTag {
    pub fn describe(&self) -> &'static str {
        match self {
            DeclKindTag::Package => "package",
            DeclKindTag::Class => "class",
            DeclKindTag::Function => "function",
            DeclKindTag::Property => "property",
            DeclKindTag::PropertyAccessor => "property accessor",
        }
    }
}

impl std::fmt::Display for DeclKindTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A named entity in the compiled program.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Declaration {
    pub name: Name,

    /// The containing declaration; absent for root packages.
    pub container: Option<DeclId>,

    /// Annotations attached to this declaration, in attachment order.
    pub annotations: Annotations,

    pub kind: DeclKind,
}

impl Declaration {
    /// The discriminant of the kind-specific payload.
    pub fn tag(&self) -> DeclKindTag {
        DeclKindTag::from(&self.kind)
    }
}
