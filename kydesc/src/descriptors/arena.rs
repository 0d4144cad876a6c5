//! Arena ownership of declarations.
//!
//! A [`DescriptorArena`] owns every declaration of one module and hands out
//! stable [`DeclId`] keys. Containment links always point at declarations
//! inserted earlier, so the containment graph is acyclic by construction.
use std::collections::BTreeMap;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use slotmap::{SecondaryMap, SlotMap, new_key_type};
use uuid::Uuid;

use crate::{
    annotations::Annotations,
    descriptors::{
        AccessorInfo, AccessorKind, ClassInfo, DeclKind, Declaration, FunctionInfo, PropertyInfo,
        TypeRef,
    },
    name::{FqName, Name},
    utils::{DescError, DescResult},
};

new_key_type! {
    /// Stable identity of a declaration within one [`DescriptorArena`].
    pub struct DeclId;
}

/// Owns the declarations of one module.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DescriptorArena {
    /// Unique identifier of the module this arena describes.
    pub uuid: Uuid,

    /// Display name of the module.
    pub name: Name,

    decls: SlotMap<DeclId, Declaration>,
    children: SecondaryMap<DeclId, Vec<DeclId>>,
    packages: BTreeMap<FqName, DeclId>,
}

impl DescriptorArena {
    pub fn new(name: Name) -> Self {
        DescriptorArena {
            uuid: Uuid::new_v4(),
            name,
            decls: SlotMap::with_key(),
            children: SecondaryMap::new(),
            packages: BTreeMap::new(),
        }
    }

    /// Get or create the package declaration for `path`, creating missing
    /// parent packages along the way. The root path maps to a synthesized
    /// `<root>` package.
    pub fn add_package(&mut self, path: &FqName) -> DeclId {
        if let Some(&id) = self.packages.get(path) {
            return id;
        }

        let container = path.parent().map(|parent| self.add_package(&parent));
        let name = match path.short_name() {
            Some(name) => name.clone(),
            None => Name::Special("<root>".into()),
        };

        let id = self.insert(Declaration {
            name,
            container,
            annotations: Annotations::new(),
            kind: DeclKind::Package,
        });
        self.packages.insert(path.clone(), id);
        debug!("registered package `{}` in module `{}`", path, self.name);
        id
    }

    /// Add a class-like declaration to a package or class.
    pub fn add_class(
        &mut self,
        container: DeclId,
        name: Name,
        info: ClassInfo,
        annotations: Annotations,
    ) -> DescResult<DeclId> {
        self.check_container(container)?;
        Ok(self.insert(Declaration {
            name,
            container: Some(container),
            annotations,
            kind: DeclKind::Class(info),
        }))
    }

    /// Add a function to a package or class.
    pub fn add_function(
        &mut self,
        container: DeclId,
        name: Name,
        info: FunctionInfo,
        annotations: Annotations,
    ) -> DescResult<DeclId> {
        self.check_container(container)?;
        Ok(self.insert(Declaration {
            name,
            container: Some(container),
            annotations,
            kind: DeclKind::Function(info),
        }))
    }

    /// Add a property to a package or class. Accessors are attached
    /// separately through [`DescriptorArena::add_accessor`].
    pub fn add_property(
        &mut self,
        container: DeclId,
        name: Name,
        ty: TypeRef,
        is_var: bool,
        annotations: Annotations,
    ) -> DescResult<DeclId> {
        self.check_container(container)?;
        Ok(self.insert(Declaration {
            name,
            container: Some(container),
            annotations,
            kind: DeclKind::Property(PropertyInfo {
                ty,
                is_var,
                getter: None,
                setter: None,
            }),
        }))
    }

    /// Attach an accessor to an existing property. The accessor shares the
    /// property's container and receives a synthesized `<get-x>`/`<set-x>`
    /// name.
    pub fn add_accessor(
        &mut self,
        property: DeclId,
        kind: AccessorKind,
        annotations: Annotations,
    ) -> DescResult<DeclId> {
        let (container, property_name) = {
            let decl = self.decls.get(property).ok_or(DescError::UnknownDeclaration)?;
            match &decl.kind {
                DeclKind::Property(info) => {
                    let taken = match kind {
                        AccessorKind::Getter => info.getter.is_some(),
                        AccessorKind::Setter => info.setter.is_some(),
                    };
                    if taken {
                        return Err(DescError::AccessorAlreadyDefined {
                            property: decl.name.to_string(),
                            accessor: kind.describe(),
                        });
                    }
                    (decl.container, decl.name.clone())
                }
                _ => {
                    return Err(DescError::NotAProperty {
                        name: decl.name.to_string(),
                        found: decl.tag().describe(),
                    });
                }
            }
        };

        let prefix = match kind {
            AccessorKind::Getter => "get",
            AccessorKind::Setter => "set",
        };
        let id = self.insert(Declaration {
            name: Name::Special(format!("<{}-{}>", prefix, property_name).into_boxed_str()),
            container,
            annotations,
            kind: DeclKind::PropertyAccessor(AccessorInfo { kind, property }),
        });

        // Back-link; the property was checked to be present above.
        if let Some(decl) = self.decls.get_mut(property) {
            if let DeclKind::Property(info) = &mut decl.kind {
                match kind {
                    AccessorKind::Getter => info.getter = Some(id),
                    AccessorKind::Setter => info.setter = Some(id),
                }
            }
        }
        Ok(id)
    }

    fn insert(&mut self, decl: Declaration) -> DeclId {
        let container = decl.container;
        let id = self.decls.insert(decl);
        if let Some(container) = container {
            if let Some(members) = self.children.get_mut(container) {
                members.push(id);
            } else {
                self.children.insert(container, vec![id]);
            }
        }
        id
    }

    fn check_container(&self, id: DeclId) -> DescResult<()> {
        match self.decls.get(id) {
            None => Err(DescError::UnknownDeclaration),
            Some(decl) if matches!(decl.kind, DeclKind::Package | DeclKind::Class(_)) => Ok(()),
            Some(decl) => Err(DescError::NotAContainer {
                name: decl.name.to_string(),
                found: decl.tag().describe(),
            }),
        }
    }

    /// Look up a declaration. Dangling ids answer `None`.
    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id)
    }

    /// The containing declaration, absent for root packages and dangling ids.
    pub fn container_of(&self, id: DeclId) -> Option<DeclId> {
        self.decls.get(id).and_then(|decl| decl.container)
    }

    /// For a property accessor, the property it belongs to.
    pub fn corresponding_property(&self, id: DeclId) -> Option<DeclId> {
        match &self.decls.get(id)?.kind {
            DeclKind::PropertyAccessor(info) => Some(info.property),
            _ => None,
        }
    }

    /// Member declarations of a package or class, in insertion order.
    pub fn members(&self, id: DeclId) -> impl Iterator<Item = DeclId> + '_ {
        self.children.get(id).into_iter().flatten().copied()
    }

    /// Reconstruct the fully-qualified name of a declaration by walking its
    /// container chain. Declarations with a synthesized name (accessors,
    /// anonymous objects) have no fully-qualified name.
    pub fn fq_name_of(&self, id: DeclId) -> Option<FqName> {
        let decl = self.get(id)?;
        if decl.container.is_none() && decl.kind.is_package() && decl.name.is_special() {
            return Some(FqName::root());
        }
        if decl.name.is_special() {
            return None;
        }
        let parent = match decl.container {
            Some(container) => self.fq_name_of(container)?,
            None => FqName::root(),
        };
        Some(parent.child(decl.name.clone()))
    }

    /// Iterate over all declarations in the arena.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &Declaration)> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
