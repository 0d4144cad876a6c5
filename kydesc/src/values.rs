//! Literal values carried by annotation arguments.
//!
//! Annotation arguments are restricted to compile-time constants: primitives,
//! strings, class and enum references, nested annotations and arrays thereof.
//! The query layer hands these out by reference and never interprets them.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumTryAs};

use crate::{
    annotations::AnnotationDescriptor,
    name::{FqName, Name},
};

/// A reference to one entry of an enum class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnumEntryValue {
    /// Fully-qualified name of the enum class.
    pub enum_class: FqName,

    /// Simple name of the referenced entry.
    pub entry: Name,
}

/// A compile-time constant usable as an annotation argument.
#[derive(Debug, Clone, PartialEq, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstantValue {
    Boolean(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(Box<str>),
    Null,

    /// Reference to an enum entry.
    EnumEntry(EnumEntryValue),

    /// Homogeneous array of constants (eg., a vararg annotation parameter).
    Array(Vec<ConstantValue>),

    /// Nested annotation value.
    Annotation(Box<AnnotationDescriptor>),

    /// Reference to a class literal (`Foo::class`).
    KClass(FqName),
}

impl From<&str> for ConstantValue {
    fn from(text: &str) -> Self {
        ConstantValue::Str(text.into())
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Boolean(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        ConstantValue::Int(value)
    }
}

impl std::fmt::Display for ConstantValue {
    /// Diagnostic rendering in a literal-like form. String escapes are not
    /// reproduced.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstantValue::Boolean(value) => write!(f, "{}", value),
            ConstantValue::Char(value) => write!(f, "'{}'", value),
            ConstantValue::Byte(value) => write!(f, "{}", value),
            ConstantValue::Short(value) => write!(f, "{}", value),
            ConstantValue::Int(value) => write!(f, "{}", value),
            ConstantValue::Long(value) => write!(f, "{}L", value),
            ConstantValue::Float(value) => write!(f, "{}f", value),
            ConstantValue::Double(value) => write!(f, "{}", value),
            ConstantValue::Str(value) => write!(f, "\"{}\"", value),
            ConstantValue::Null => write!(f, "null"),
            ConstantValue::EnumEntry(value) => {
                write!(f, "{}.{}", value.enum_class, value.entry)
            }
            ConstantValue::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            ConstantValue::Annotation(annotation) => write!(f, "@{}", annotation.fq_name),
            ConstantValue::KClass(class) => write!(f, "{}::class", class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_literal_forms() {
        let entry = ConstantValue::EnumEntry(EnumEntryValue {
            enum_class: "kotlin.DeprecationLevel".parse().unwrap(),
            entry: Name::identifier("ERROR").unwrap(),
        });
        assert_eq!(entry.to_string(), "kotlin.DeprecationLevel.ERROR");

        let array = ConstantValue::Array(vec![
            ConstantValue::Int(1),
            ConstantValue::from("two"),
            ConstantValue::Null,
        ]);
        assert_eq!(array.to_string(), "[1, \"two\", null]");
    }

    #[test]
    fn try_as_accessors_follow_the_tag() {
        let value = ConstantValue::from("text");
        assert!(value.is_str());
        assert_eq!(value.try_as_str_ref().map(|s| &**s), Some("text"));
        assert!(ConstantValue::Null.try_as_int().is_none());
    }
}
