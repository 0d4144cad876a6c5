//! Applicability of annotation attachments.
//!
//! Checks an attachment against the declared shape of its annotation class:
//! with a use-site target, the role the qualifier implies must be permitted;
//! with the default target, the annotated declaration's own roles must
//! intersect the declared target set. Unknown annotation classes are skipped
//! rather than reported, keeping the check best-effort.
use kydesc::{
    annotations::UseSiteTarget,
    descriptors::{DeclId, Declaration, DescriptorArena},
    name::FqName,
    targets::{AnnotationClassSpec, DeclarationTarget, target_of},
};
use log::debug;

use crate::names;

/// The declaration role implied by a use-site qualifier.
pub fn use_site_implied_target(target: UseSiteTarget) -> Option<DeclarationTarget> {
    match target {
        UseSiteTarget::Field | UseSiteTarget::PropertyDelegateField => {
            Some(DeclarationTarget::Field)
        }
        UseSiteTarget::File => Some(DeclarationTarget::File),
        UseSiteTarget::Property => Some(DeclarationTarget::Property),
        UseSiteTarget::PropertyGetter => Some(DeclarationTarget::PropertyGetter),
        UseSiteTarget::PropertySetter => Some(DeclarationTarget::PropertySetter),
        UseSiteTarget::Receiver
        | UseSiteTarget::ConstructorParameter
        | UseSiteTarget::SetterParameter => Some(DeclarationTarget::ValueParameter),
    }
}

/// Whether one attachment of `spec`'s annotation class to `decl` is
/// permitted.
pub fn is_applicable(
    spec: &AnnotationClassSpec,
    decl: &Declaration,
    use_site: Option<UseSiteTarget>,
) -> bool {
    match use_site {
        Some(target) => use_site_implied_target(target)
            .is_some_and(|implied| spec.targets.contains(implied.as_flag())),
        None => spec.targets.intersects(target_of(decl)),
    }
}

/// Attachments on `id` that violate the declared targets of a well-known
/// annotation class. Unknown classes are skipped.
pub fn inapplicable_annotations(
    arena: &DescriptorArena,
    id: DeclId,
) -> Vec<(FqName, Option<UseSiteTarget>)> {
    let Some(decl) = arena.get(id) else {
        return Vec::new();
    };
    decl.annotations
        .iter()
        .filter_map(|entry| {
            let fq_name = &entry.annotation.fq_name;
            match names::well_known_spec(fq_name) {
                None => {
                    debug!("no declared targets for `{}`, skipping applicability", fq_name);
                    None
                }
                Some(spec) if is_applicable(spec, decl, entry.target) => None,
                Some(_) => Some((fq_name.clone(), entry.target)),
            }
        })
        .collect()
}
