use kydesc::{
    annotations::{AnnotationDescriptor, Annotations, UseSiteTarget},
    descriptors::{
        AccessorKind, ClassInfo, ClassKind, DeclId, DescriptorArena, FunctionInfo, TypeRef,
    },
    name::Name,
};
use kyresolve::{annotations::*, names};

fn ident(text: &str) -> Name {
    Name::identifier(text).expect("valid identifier")
}

fn jvm_static_marker() -> Annotations {
    Annotations::from(AnnotationDescriptor::new(names::JVM_STATIC.clone()))
}

fn int_type() -> TypeRef {
    TypeRef::nominal("kotlin.Int".parse().expect("valid name"))
}

struct Fixture {
    arena: DescriptorArena,
    class: DeclId,
    companion: DeclId,
    object: DeclId,
}

/// ```text
/// package demo
///   class Host
///     companion object
///   object Registry
/// ```
fn build_fixture() -> Fixture {
    let mut arena = DescriptorArena::new(ident("main"));
    let pkg = arena.add_package(&"demo".parse().expect("valid path"));
    let class = arena
        .add_class(
            pkg,
            ident("Host"),
            ClassInfo::new(ClassKind::Class),
            Annotations::new(),
        )
        .expect("class inserted");
    let companion = arena
        .add_class(class, ident("Companion"), ClassInfo::companion(), Annotations::new())
        .expect("companion inserted");
    let object = arena
        .add_class(
            pkg,
            ident("Registry"),
            ClassInfo::new(ClassKind::Object),
            Annotations::new(),
        )
        .expect("object inserted");
    Fixture {
        arena,
        class,
        companion,
        object,
    }
}

#[test]
fn unmarked_declarations_are_never_static() {
    let Fixture {
        mut arena, class, ..
    } = build_fixture();
    let function = arena
        .add_function(class, ident("run"), FunctionInfo::default(), Annotations::new())
        .expect("function inserted");

    assert!(!has_jvm_static_annotation(&arena, function));
    assert!(!has_annotation(&arena, function, &names::JVM_STATIC));
    assert!(!is_platform_static_in_object_or_class(&arena, function));
    assert!(!is_platform_static_in_companion_object(&arena, function));
}

#[test]
fn marked_class_member_is_static_in_object_or_class_only() {
    let Fixture {
        mut arena, class, ..
    } = build_fixture();
    let function = arena
        .add_function(class, ident("run"), FunctionInfo::default(), jvm_static_marker())
        .expect("function inserted");

    assert!(is_platform_static_in_object_or_class(&arena, function));
    // Same declaration, companion predicate: the container is an ordinary
    // class, so the classification flips.
    assert!(!is_platform_static_in_companion_object(&arena, function));
}

#[test]
fn marked_companion_member_is_static_in_companion_only() {
    let Fixture {
        mut arena,
        companion,
        ..
    } = build_fixture();
    let function = arena
        .add_function(companion, ident("run"), FunctionInfo::default(), jvm_static_marker())
        .expect("function inserted");

    assert!(is_platform_static_in_companion_object(&arena, function));
    assert!(!is_platform_static_in_object_or_class(&arena, function));
}

#[test]
fn marked_object_member_counts_as_object_or_class() {
    let Fixture {
        mut arena, object, ..
    } = build_fixture();
    let function = arena
        .add_function(object, ident("run"), FunctionInfo::default(), jvm_static_marker())
        .expect("function inserted");

    assert!(is_platform_static_in_object_or_class(&arena, function));
    assert!(!is_platform_static_in_companion_object(&arena, function));
}

#[test]
fn accessor_inherits_the_marker_from_its_property() {
    let Fixture {
        mut arena,
        companion,
        ..
    } = build_fixture();
    // The property carries the marker; the getter itself does not.
    let property = arena
        .add_property(companion, ident("count"), int_type(), false, jvm_static_marker())
        .expect("property inserted");
    let getter = arena
        .add_accessor(property, AccessorKind::Getter, Annotations::new())
        .expect("getter inserted");

    assert!(!has_jvm_static_annotation(&arena, getter));
    assert!(is_platform_static_in_companion_object(&arena, getter));
    assert!(!is_platform_static_in_object_or_class(&arena, getter));
}

#[test]
fn accessor_own_marker_is_sufficient() {
    let Fixture {
        mut arena, class, ..
    } = build_fixture();
    let property = arena
        .add_property(class, ident("count"), int_type(), false, Annotations::new())
        .expect("property inserted");
    let getter = arena
        .add_accessor(property, AccessorKind::Getter, jvm_static_marker())
        .expect("getter inserted");

    assert!(is_platform_static_in_object_or_class(&arena, getter));
}

#[test]
fn top_level_declarations_are_never_static() {
    let Fixture { mut arena, .. } = build_fixture();
    let pkg = arena.add_package(&"demo".parse().expect("valid path"));
    let function = arena
        .add_function(pkg, ident("main"), FunctionInfo::default(), jvm_static_marker())
        .expect("function inserted");

    // Marker present, but the container is a package: neither predicate holds.
    assert!(has_jvm_static_annotation(&arena, function));
    assert!(!is_platform_static_in_object_or_class(&arena, function));
    assert!(!is_platform_static_in_companion_object(&arena, function));
}

#[test]
fn synthetic_marker_accepts_default_and_field_targets() {
    let Fixture {
        mut arena, class, ..
    } = build_fixture();

    let plain = arena
        .add_property(
            class,
            ident("plain"),
            int_type(),
            false,
            Annotations::from(AnnotationDescriptor::new(names::JVM_SYNTHETIC.clone())),
        )
        .expect("property inserted");

    let mut field_targeted = Annotations::new();
    field_targeted.push_targeted(
        UseSiteTarget::Field,
        AnnotationDescriptor::new(names::JVM_SYNTHETIC.clone()),
    );
    let on_field = arena
        .add_property(class, ident("onField"), int_type(), false, field_targeted)
        .expect("property inserted");

    let mut getter_targeted = Annotations::new();
    getter_targeted.push_targeted(
        UseSiteTarget::PropertyGetter,
        AnnotationDescriptor::new(names::JVM_SYNTHETIC.clone()),
    );
    let on_getter = arena
        .add_property(class, ident("onGetter"), int_type(), false, getter_targeted)
        .expect("property inserted");

    let bare = arena
        .add_property(class, ident("bare"), int_type(), false, Annotations::new())
        .expect("property inserted");

    assert!(has_jvm_synthetic_annotation(&arena, plain));
    assert!(has_jvm_synthetic_annotation(&arena, on_field));
    // Any other use-site target does not satisfy the marker.
    assert!(!has_jvm_synthetic_annotation(&arena, on_getter));
    assert!(!has_jvm_synthetic_annotation(&arena, bare));
}

#[test]
fn jvm_field_lookup_returns_the_attached_annotation() {
    let Fixture {
        mut arena, class, ..
    } = build_fixture();
    let marked = arena
        .add_property(
            class,
            ident("handle"),
            int_type(),
            false,
            Annotations::from(AnnotationDescriptor::new(names::JVM_FIELD.clone())),
        )
        .expect("property inserted");
    let unmarked = arena
        .add_property(class, ident("other"), int_type(), false, Annotations::new())
        .expect("property inserted");

    assert!(
        find_jvm_field_annotation(&arena, marked)
            .is_some_and(|annotation| annotation.fq_name == *names::JVM_FIELD)
    );
    assert!(find_jvm_field_annotation(&arena, unmarked).is_none());
}
