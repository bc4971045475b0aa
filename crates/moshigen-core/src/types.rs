//! Java type model for adapter generation.
//!
//! Declared field types arrive as part of the class model and are consumed in
//! two forms: as declaration text (field slots, adapter type parameters) and
//! as a runtime `java.lang.reflect.Type` expression handed to the conversion
//! context when a delegated adapter is resolved.
//!
//! | Model type | Declaration text | Runtime type expression |
//! |------------|------------------|-------------------------|
//! | `primitive int` | `int` | `int.class` |
//! | `boxed long` | `Long` | `Long.class` |
//! | `string` | `String` | `String.class` |
//! | `class C` | `com.example.C` | `com.example.C.class` |
//! | `Map<K, V>` | `java.util.Map<K, V>` | `Types.newParameterizedType(Map.class, K, V)` |
//! | `? extends T` | `? extends T` | expression for `T` |

use serde::{Deserialize, Serialize};

/// A Java primitive kind, as spelled in a class model.
///
/// All eight kinds can be described; `byte` and `char` are rejected later by
/// strategy selection because the streaming reader has no method for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    /// Java keyword for the primitive form.
    pub fn java_name(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// Simple name of the `java.lang` box for this primitive.
    pub fn boxed_name(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Int => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Char => "Character",
            PrimitiveType::Float => "Float",
            PrimitiveType::Double => "Double",
        }
    }
}

/// A declared Java type as described by the class model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JavaType {
    /// An unboxed primitive, e.g. `int`.
    Primitive(PrimitiveType),
    /// A `java.lang` box, e.g. `Integer`.
    Boxed(PrimitiveType),
    /// `java.lang.String`.
    String,
    /// Any other non-generic class, by qualified name.
    Class(String),
    /// A parameterized type, e.g. `Map<String, List<Nested>>`.
    Parameterized { raw: String, args: Vec<JavaType> },
    /// A wildcard type argument; unbounded wildcards carry
    /// `java.lang.Object` as their upper bound.
    Wildcard { upper: Box<JavaType> },
}

impl JavaType {
    /// The boxed form of this type, used for null-initialized holding slots
    /// and extracted temporaries. Non-primitive types box to themselves.
    pub fn boxed(&self) -> JavaType {
        match self {
            JavaType::Primitive(p) => JavaType::Boxed(*p),
            other => other.clone(),
        }
    }

    /// Declaration text for this type.
    ///
    /// `java.lang` types print their simple name; everything else is fully
    /// qualified so the emitted source never needs import management for
    /// user types.
    pub fn java_name(&self) -> String {
        match self {
            JavaType::Primitive(p) => p.java_name().to_string(),
            JavaType::Boxed(p) => p.boxed_name().to_string(),
            JavaType::String => "String".to_string(),
            JavaType::Class(qualified) => qualified.clone(),
            JavaType::Parameterized { raw, args } => {
                let args = args
                    .iter()
                    .map(JavaType::java_name)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{raw}<{args}>")
            }
            JavaType::Wildcard { upper } => {
                if **upper == JavaType::Class("java.lang.Object".to_string()) {
                    "?".to_string()
                } else {
                    format!("? extends {}", upper.java_name())
                }
            }
        }
    }

    /// Expression reconstructing this type as a runtime
    /// `java.lang.reflect.Type`, for delegated adapter lookups.
    ///
    /// Parameterized types recurse through
    /// `com.squareup.moshi.Types.newParameterizedType`; wildcard arguments
    /// resolve to their upper bound.
    pub fn runtime_type_expr(&self) -> String {
        match self {
            JavaType::Primitive(p) => format!("{}.class", p.java_name()),
            JavaType::Boxed(p) => format!("{}.class", p.boxed_name()),
            JavaType::String => "String.class".to_string(),
            JavaType::Class(qualified) => format!("{qualified}.class"),
            JavaType::Parameterized { raw, args } => {
                let args = args
                    .iter()
                    .map(JavaType::runtime_type_expr)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("com.squareup.moshi.Types.newParameterizedType({raw}.class, {args})")
            }
            JavaType::Wildcard { upper } => upper.runtime_type_expr(),
        }
    }

    /// True for `boolean` and its box, which steer `is`-style accessor lookup.
    pub fn is_boolean_like(&self) -> bool {
        matches!(
            self,
            JavaType::Primitive(PrimitiveType::Boolean) | JavaType::Boxed(PrimitiveType::Boolean)
        )
    }
}
