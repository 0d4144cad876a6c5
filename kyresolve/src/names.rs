//! Well-known annotation names and their declared shapes.
use kydesc::{
    name::FqName,
    targets::{AnnotationClassSpec, Retention, TargetSet},
};
use once_cell::sync::Lazy;

/// `kotlin.jvm.JvmStatic`
pub static JVM_STATIC: Lazy<FqName> = Lazy::new(|| well_formed("kotlin.jvm.JvmStatic"));

/// `kotlin.jvm.JvmSynthetic`
pub static JVM_SYNTHETIC: Lazy<FqName> = Lazy::new(|| well_formed("kotlin.jvm.JvmSynthetic"));

/// `kotlin.jvm.JvmField`
pub static JVM_FIELD: Lazy<FqName> = Lazy::new(|| well_formed("kotlin.jvm.JvmField"));

/// `kotlin.native.ThreadLocal`
pub static THREAD_LOCAL: Lazy<FqName> = Lazy::new(|| well_formed("kotlin.native.ThreadLocal"));

/// `kotlin.native.SharedImmutable`
pub static SHARED_IMMUTABLE: Lazy<FqName> =
    Lazy::new(|| well_formed("kotlin.native.SharedImmutable"));

fn well_formed(text: &str) -> FqName {
    text.parse().expect("well-known names are well-formed")
}

static WELL_KNOWN_SPECS: Lazy<Vec<AnnotationClassSpec>> = Lazy::new(|| {
    vec![
        AnnotationClassSpec::new(
            JVM_STATIC.clone(),
            TargetSet::FUNCTION
                | TargetSet::PROPERTY
                | TargetSet::PROPERTY_GETTER
                | TargetSet::PROPERTY_SETTER,
        ),
        AnnotationClassSpec::new(
            JVM_SYNTHETIC.clone(),
            TargetSet::FUNCTION
                | TargetSet::PROPERTY_GETTER
                | TargetSet::PROPERTY_SETTER
                | TargetSet::FIELD,
        )
        .with_retention(Retention::Binary),
        AnnotationClassSpec::new(JVM_FIELD.clone(), TargetSet::FIELD)
            .with_retention(Retention::Binary),
        // Thread local top-level state; applies to properties and singleton
        // objects.
        AnnotationClassSpec::new(
            THREAD_LOCAL.clone(),
            TargetSet::PROPERTY | TargetSet::CLASS,
        )
        .with_retention(Retention::Binary)
        .optionally_expected(),
        AnnotationClassSpec::new(SHARED_IMMUTABLE.clone(), TargetSet::PROPERTY)
            .with_retention(Retention::Binary)
            .optionally_expected(),
    ]
});

/// The declared shape of a well-known annotation class, absent for anything
/// not in the built-in table.
pub fn well_known_spec(fq_name: &FqName) -> Option<&'static AnnotationClassSpec> {
    WELL_KNOWN_SPECS.iter().find(|spec| spec.fq_name == *fq_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_table_answers_by_name() {
        let spec = well_known_spec(&JVM_STATIC).expect("JvmStatic is well-known");
        assert!(spec.targets.contains(TargetSet::FUNCTION));
        assert!(!spec.optional_expectation);

        let spec = well_known_spec(&THREAD_LOCAL).expect("ThreadLocal is well-known");
        assert!(spec.optional_expectation);
        assert!(spec.retention.is_binary());

        assert!(well_known_spec(&"demo.Unknown".parse().unwrap()).is_none());
    }
}
