//! Annotation lookups used during declaration analysis.
//!
//! Thin, total queries over a declaration's annotation set. The static
//! dispatch classifiers (`is_platform_static_in_*`) share one traversal and
//! differ only in the container predicate they evaluate; the synthetic-marker
//! check ORs the default-target attachment with the field-targeted one, two
//! spellings of the same intent. This OR is specific to the synthetic marker
//! and is not applied to other lookups.
use kydesc::{
    annotations::{AnnotationDescriptor, UseSiteTarget},
    descriptors::{DeclId, DeclKind, DescriptorArena},
    name::FqName,
    values::ConstantValue,
};

use crate::{classifiers, names};

/// True iff the declaration carries a default-target annotation named
/// `fq_name`.
pub fn has_annotation(arena: &DescriptorArena, id: DeclId, fq_name: &FqName) -> bool {
    arena
        .get(id)
        .is_some_and(|decl| decl.annotations.has(fq_name))
}

/// True iff the declaration carries the `kotlin.jvm.JvmStatic` marker.
pub fn has_jvm_static_annotation(arena: &DescriptorArena, id: DeclId) -> bool {
    has_annotation(arena, id, &names::JVM_STATIC)
}

/// True iff the declaration carries the `kotlin.jvm.JvmSynthetic` marker,
/// attached either with the default target or explicitly to the backing
/// field.
pub fn has_jvm_synthetic_annotation(arena: &DescriptorArena, id: DeclId) -> bool {
    arena.get(id).is_some_and(|decl| {
        decl.annotations.find(&names::JVM_SYNTHETIC).is_some()
            || decl
                .annotations
                .find_use_site_targeted(UseSiteTarget::Field, &names::JVM_SYNTHETIC)
                .is_some()
    })
}

/// The `kotlin.jvm.JvmField` annotation of the declaration, if attached.
pub fn find_jvm_field_annotation(
    arena: &DescriptorArena,
    id: DeclId,
) -> Option<&AnnotationDescriptor> {
    arena.get(id)?.annotations.find(&names::JVM_FIELD)
}

/// True iff the declaration is a static member of a non-companion singleton
/// object, an ordinary class, or an enum class.
pub fn is_platform_static_in_object_or_class(arena: &DescriptorArena, id: DeclId) -> bool {
    is_platform_static_in(arena, id, |arena, container| {
        classifiers::is_non_companion_object(arena, container)
            || classifiers::is_class_or_enum_class(arena, container)
    })
}

/// True iff the declaration is a static member of a companion object.
pub fn is_platform_static_in_companion_object(arena: &DescriptorArena, id: DeclId) -> bool {
    is_platform_static_in(arena, id, classifiers::is_companion_object)
}

/// Shared traversal for the `is_platform_static_in_*` classifiers.
///
/// A property accessor is classified through its corresponding property: the
/// container predicate is evaluated on the property's container, and the
/// static marker may sit on either the accessor or the property itself.
/// Everything else is classified in place.
fn is_platform_static_in(
    arena: &DescriptorArena,
    id: DeclId,
    container_predicate: impl Fn(&DescriptorArena, DeclId) -> bool,
) -> bool {
    let Some(decl) = arena.get(id) else {
        return false;
    };
    match &decl.kind {
        DeclKind::PropertyAccessor(info) => {
            let Some(property) = arena.get(info.property) else {
                return false;
            };
            let Some(container) = property.container else {
                return false;
            };
            container_predicate(arena, container)
                && (has_jvm_static_annotation(arena, id)
                    || has_jvm_static_annotation(arena, info.property))
        }
        _ => {
            let Some(container) = decl.container else {
                return false;
            };
            container_predicate(arena, container) && has_jvm_static_annotation(arena, id)
        }
    }
}

/// The value of the annotation argument named `parameter`, when exactly one
/// argument matches by name. Zero matches and duplicate names both answer
/// `None`.
pub fn argument_value<'a>(
    annotation: &'a AnnotationDescriptor,
    parameter: &str,
) -> Option<&'a ConstantValue> {
    let mut matches = annotation
        .arguments
        .iter()
        .filter(|(name, _)| name.as_str() == parameter);
    let (_, value) = matches.next()?;
    if matches.next().is_some() {
        // Ambiguous by duplication; treated as absent.
        return None;
    }
    Some(value)
}
