//! Serialized class model consumed by the generator.
//!
//! The model is a reflection snapshot produced by the build integration: one
//! entry per class relevant to the round, carrying enough structure (enclosing
//! scopes, modifiers, fields, methods, constructors, annotation uses) for
//! descriptor construction to run without any live introspection. Classes
//! that only provide context, such as superclasses and parcel types, appear
//! without any marker annotation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{GeneratorError, GeneratorResult};
use crate::types::JavaType;

/// Marker requesting adapter generation for a class.
pub const GENERATE_MOSHI: &str = "com.moshigen.GenerateMoshi";
/// Marker declaring a multi-class dispatch factory.
pub const GENERATE_MOSHI_FACTORY: &str = "com.moshigen.GenerateMoshiFactory";
/// Wire-name override, first recognized form (member `name`).
pub const MOSHI_JSON: &str = "com.squareup.moshi.Json";
/// Wire-name override, second recognized form (member `value`), consulted
/// only when the first is absent.
pub const GSON_SERIALIZED_NAME: &str = "com.google.gson.annotations.SerializedName";
/// Nullability marker, IntelliJ namespace.
pub const NULLABLE_JETBRAINS: &str = "org.jetbrains.annotations.Nullable";
/// Nullability marker, Android support namespace.
pub const NULLABLE_ANDROID: &str = "android.support.annotation.Nullable";
/// Interface enabling parcel-constructor exclusion.
pub const PARCELABLE_INTERFACE: &str = "android.os.Parcelable";
/// Parameter type identifying a parcel constructor.
pub const PARCEL_CLASS: &str = "android.os.Parcel";

/// Kind of a model entry. Only classes may carry the adapter marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
}

fn default_class_kind() -> ClassKind {
    ClassKind::Class
}

/// Declaration modifiers surfaced by the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
}

fn has_modifier(modifiers: &[Modifier], wanted: Modifier) -> bool {
    modifiers.contains(&wanted)
}

/// One step of an enclosing-scope chain, ordered innermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// An enclosing package; ends the package walk.
    Package(String),
    /// An enclosing type (nested class declarations).
    Type(String),
}

/// A value assigned to an annotation member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    Bool(bool),
    Str(String),
    /// A list of class references, spelled as qualified names.
    Classes(Vec<String>),
}

/// One annotation occurrence: qualified type name plus named member values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationUse {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub values: BTreeMap<String, AnnotationValue>,
}

impl AnnotationUse {
    pub fn bool_value(&self, member: &str, default: bool) -> bool {
        match self.values.get(member) {
            Some(AnnotationValue::Bool(value)) => *value,
            _ => default,
        }
    }

    pub fn string_value(&self, member: &str) -> Option<&str> {
        match self.values.get(member) {
            Some(AnnotationValue::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn class_list(&self, member: &str) -> &[String] {
        match self.values.get(member) {
            Some(AnnotationValue::Classes(classes)) => classes,
            _ => &[],
        }
    }
}

fn find_annotation<'a>(
    annotations: &'a [AnnotationUse],
    type_name: &str,
) -> Option<&'a AnnotationUse> {
    annotations.iter().find(|a| a.type_name == type_name)
}

/// A declared instance or static field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: JavaType,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationUse>,
}

impl FieldDecl {
    pub fn is_public(&self) -> bool {
        has_modifier(&self.modifiers, Modifier::Public)
    }

    pub fn is_private(&self) -> bool {
        has_modifier(&self.modifiers, Modifier::Private)
    }

    pub fn is_static(&self) -> bool {
        has_modifier(&self.modifiers, Modifier::Static)
    }

    pub fn is_transient(&self) -> bool {
        has_modifier(&self.modifiers, Modifier::Transient)
    }

    pub fn annotation(&self, type_name: &str) -> Option<&AnnotationUse> {
        find_annotation(&self.annotations, type_name)
    }

    pub fn has_annotation(&self, type_name: &str) -> bool {
        self.annotation(type_name).is_some()
    }
}

/// A declared method, reduced to what accessor discovery needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<JavaType>,
    /// `None` for void methods.
    #[serde(default)]
    pub return_type: Option<JavaType>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl MethodDecl {
    pub fn is_public(&self) -> bool {
        has_modifier(&self.modifiers, Modifier::Public)
    }
}

/// One constructor parameter. Reader fields derive from these, so naming and
/// nullability annotations are read off the parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: JavaType,
    #[serde(default)]
    pub annotations: Vec<AnnotationUse>,
}

impl ParamDecl {
    pub fn annotation(&self, type_name: &str) -> Option<&AnnotationUse> {
        find_annotation(&self.annotations, type_name)
    }

    pub fn has_annotation(&self, type_name: &str) -> bool {
        self.annotation(type_name).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub params: Vec<ParamDecl>,
}

/// One class (or interface/enum) entry in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    #[serde(default = "default_class_kind")]
    pub kind: ClassKind,
    pub simple_name: String,
    /// Enclosing scopes, innermost first. The package walk takes the first
    /// [`Scope::Package`]; type scopes before it mark a nested declaration.
    #[serde(default)]
    pub enclosing: Vec<Scope>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Qualified superclass name; absent means `java.lang.Object`.
    #[serde(default)]
    pub superclass: Option<String>,
    /// Qualified names of implemented interfaces, including any inherited
    /// ones the snapshot chooses to surface.
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDecl>,
    #[serde(default)]
    pub annotations: Vec<AnnotationUse>,
}

impl ClassDecl {
    pub fn is_public(&self) -> bool {
        has_modifier(&self.modifiers, Modifier::Public)
    }

    pub fn is_abstract(&self) -> bool {
        has_modifier(&self.modifiers, Modifier::Abstract)
    }

    pub fn annotation(&self, type_name: &str) -> Option<&AnnotationUse> {
        find_annotation(&self.annotations, type_name)
    }

    pub fn has_annotation(&self, type_name: &str) -> bool {
        self.annotation(type_name).is_some()
    }

    /// Package found by walking the enclosing scopes outward, if any.
    pub fn package(&self) -> Option<&str> {
        self.enclosing.iter().find_map(|scope| match scope {
            Scope::Package(name) => Some(name.as_str()),
            Scope::Type(_) => None,
        })
    }

    /// Qualified name derived from the enclosing chain: package (when
    /// found), then enclosing types outermost first, then the simple name.
    pub fn qualified_name(&self) -> String {
        let mut types: Vec<&str> = Vec::new();
        let mut package: Option<&str> = None;
        for scope in &self.enclosing {
            match scope {
                Scope::Type(name) => types.push(name),
                Scope::Package(name) => {
                    package = Some(name);
                    break;
                }
            }
        }

        let mut qualified = String::new();
        if let Some(package) = package {
            qualified.push_str(package);
            qualified.push('.');
        }
        for ty in types.iter().rev() {
            qualified.push_str(ty);
            qualified.push('.');
        }
        qualified.push_str(&self.simple_name);
        qualified
    }

    /// True when the class participates in the parcel capability, which
    /// excludes its single-parameter parcel constructor from the search.
    pub fn is_parcelable(&self) -> bool {
        self.interfaces.iter().any(|i| i == PARCELABLE_INTERFACE)
    }
}

/// The whole snapshot for one generation round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

impl ClassModel {
    /// Parse a model from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject snapshots with two entries under one qualified name.
    pub fn validate(&self) -> GeneratorResult<()> {
        let mut seen = BTreeSet::new();
        for class in &self.classes {
            let qualified = class.qualified_name();
            if !seen.insert(qualified.clone()) {
                return Err(GeneratorError::DuplicateClass(qualified));
            }
        }
        Ok(())
    }

    /// Look up a class by qualified name.
    pub fn find(&self, qualified: &str) -> Option<&ClassDecl> {
        self.classes.iter().find(|c| c.qualified_name() == qualified)
    }
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;
