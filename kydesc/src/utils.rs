use strum::EnumIs;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, EnumIs, Error)]
pub enum DescError {
    /// The text cannot be used as a declaration name.
    #[error(
        "The name `{text}` is not a valid identifier. Identifiers must be non-empty, must not contain `.` and must not start with `<`."
    )]
    InvalidName { text: String },

    /// A declaration id does not resolve within the arena it was used with.
    #[error(
        "The declaration id does not resolve in this arena. Ids are only meaningful for the arena that allocated them."
    )]
    UnknownDeclaration,

    /// Accessors can only be attached to properties.
    #[error(
        "Accessors may only be attached to properties. The declaration `{name}` is a {found}."
    )]
    NotAProperty { name: String, found: &'static str },

    /// A property already has an accessor of the requested kind.
    #[error("The property `{property}` already defines a {accessor}.")]
    AccessorAlreadyDefined {
        property: String,
        accessor: &'static str,
    },

    /// Only packages and classes can contain member declarations.
    #[error(
        "Members may only be added to packages and classes. The declaration `{name}` is a {found}."
    )]
    NotAContainer { name: String, found: &'static str },
}

pub type DescResult<T> = Result<T, DescError>;
