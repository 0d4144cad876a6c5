//! Declaration classification predicates.
//!
//! Total predicates over a declaration's syntactic role. Every missing-data
//! case (dangling id, absent container) answers `false`.
use kydesc::descriptors::{ClassInfo, ClassKind, DeclId, DeclKind, DescriptorArena};

fn class_info(arena: &DescriptorArena, id: DeclId) -> Option<&ClassInfo> {
    match &arena.get(id)?.kind {
        DeclKind::Class(info) => Some(info),
        _ => None,
    }
}

/// True for singleton objects, companion or not.
pub fn is_object(arena: &DescriptorArena, id: DeclId) -> bool {
    class_info(arena, id).is_some_and(|info| info.kind.is_object())
}

/// True for companion objects only.
pub fn is_companion_object(arena: &DescriptorArena, id: DeclId) -> bool {
    class_info(arena, id).is_some_and(|info| info.kind.is_object() && info.is_companion)
}

/// True for singleton objects that are not companions.
pub fn is_non_companion_object(arena: &DescriptorArena, id: DeclId) -> bool {
    class_info(arena, id).is_some_and(|info| info.kind.is_object() && !info.is_companion)
}

/// True for ordinary classes and enum classes.
pub fn is_class_or_enum_class(arena: &DescriptorArena, id: DeclId) -> bool {
    class_info(arena, id)
        .is_some_and(|info| matches!(info.kind, ClassKind::Class | ClassKind::EnumClass))
}

pub fn is_enum_class(arena: &DescriptorArena, id: DeclId) -> bool {
    class_info(arena, id).is_some_and(|info| info.kind.is_enum_class())
}

pub fn is_interface(arena: &DescriptorArena, id: DeclId) -> bool {
    class_info(arena, id).is_some_and(|info| info.kind.is_interface())
}

/// True if the declaration sits directly inside a package.
pub fn is_top_level_declaration(arena: &DescriptorArena, id: DeclId) -> bool {
    arena
        .container_of(id)
        .and_then(|container| arena.get(container))
        .is_some_and(|container| container.kind.is_package())
}
