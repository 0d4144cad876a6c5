use kydesc::{
    annotations::{AnnotationDescriptor, Annotations, UseSiteTarget},
    descriptors::{
        AccessorKind, ClassInfo, ClassKind, DeclKind, DescriptorArena, FunctionInfo, TypeRef,
    },
    name::{FqName, Name},
};

fn ident(text: &str) -> Name {
    Name::identifier(text).expect("valid identifier")
}

fn string_type() -> TypeRef {
    TypeRef::nominal("kotlin.String".parse().expect("valid name"))
}

/// Builds:
/// ```text
/// package demo.app
///   class Config
///     val label: String  (getter, setter-less)
///     companion object
///       fun create(name: kotlin.String): Config
/// ```
fn build_module() -> DescriptorArena {
    let mut arena = DescriptorArena::new(ident("app"));
    let pkg = arena.add_package(&"demo.app".parse().expect("valid path"));

    let config = arena
        .add_class(
            pkg,
            ident("Config"),
            ClassInfo::new(ClassKind::Class),
            Annotations::new(),
        )
        .expect("class inserted");

    let label = arena
        .add_property(
            config,
            ident("label"),
            string_type(),
            false,
            Annotations::from(AnnotationDescriptor::new(
                "demo.Stable".parse().expect("valid name"),
            )),
        )
        .expect("property inserted");
    arena
        .add_accessor(label, AccessorKind::Getter, Annotations::new())
        .expect("getter inserted");

    let companion = arena
        .add_class(config, ident("Companion"), ClassInfo::companion(), Annotations::new())
        .expect("companion inserted");
    arena
        .add_function(
            companion,
            ident("create"),
            FunctionInfo {
                params: vec![(ident("name"), string_type())],
                return_type: Some(TypeRef::nominal(
                    "demo.app.Config".parse().expect("valid name"),
                )),
            },
            Annotations::new(),
        )
        .expect("function inserted");

    arena
}

#[test]
fn fq_names_follow_the_containment_chain() {
    let arena = build_module();
    let expected: FqName = "demo.app.Config.Companion.create".parse().expect("valid path");

    let create = arena
        .iter()
        .find(|(_, decl)| decl.name.as_str() == "create")
        .map(|(id, _)| id)
        .expect("function present");
    assert_eq!(arena.fq_name_of(create), Some(expected));
}

#[test]
fn members_preserve_insertion_order() {
    let arena = build_module();
    let config = arena
        .iter()
        .find(|(_, decl)| decl.name.as_str() == "Config")
        .map(|(id, _)| id)
        .expect("class present");

    let names: Vec<&str> = arena
        .members(config)
        .filter_map(|id| arena.get(id))
        .map(|decl| decl.name.as_str())
        .collect();
    // label, its synthesized getter, then the companion
    assert_eq!(names, vec!["label", "<get-label>", "Companion"]);
}

#[test]
fn accessor_links_are_bidirectional() {
    let arena = build_module();
    let label = arena
        .iter()
        .find(|(_, decl)| decl.name.as_str() == "label")
        .map(|(id, _)| id)
        .expect("property present");

    let getter = match &arena.get(label).expect("property resolves").kind {
        DeclKind::Property(info) => info.getter.expect("getter attached"),
        _ => panic!("label should be a property"),
    };
    assert_eq!(arena.corresponding_property(getter), Some(label));
    // Accessor and property share a container.
    assert_eq!(arena.container_of(getter), arena.container_of(label));
}

#[test]
fn annotation_sets_are_reachable_through_the_arena() {
    let arena = build_module();
    let stable: FqName = "demo.Stable".parse().expect("valid name");

    let label = arena
        .iter()
        .find(|(_, decl)| decl.name.as_str() == "label")
        .map(|(id, _)| id)
        .expect("property present");
    let decl = arena.get(label).expect("property resolves");
    assert!(decl.annotations.has(&stable));
    assert!(
        decl.annotations
            .find_use_site_targeted(UseSiteTarget::Field, &stable)
            .is_none()
    );
}
