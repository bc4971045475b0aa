//! Class and factory descriptors: validation and field extraction.
//!
//! Descriptors are built completely, and every validation error raised,
//! before any source is emitted for a class. The round driver builds all
//! descriptors first, so emission never fails halfway through a file.

use crate::codec::FieldStrategy;
use crate::error::{GeneratorError, GeneratorResult};
use crate::model::{
    AnnotationUse, ClassDecl, ClassKind, ClassModel, ConstructorDecl, FieldDecl, ParamDecl,
    GENERATE_MOSHI, GENERATE_MOSHI_FACTORY, GSON_SERIALIZED_NAME, MOSHI_JSON, NULLABLE_ANDROID,
    NULLABLE_JETBRAINS, PARCEL_CLASS,
};
use crate::naming;
use crate::types::JavaType;

/// Factory class name used when a declaration does not choose one.
pub const DEFAULT_FACTORY_NAME: &str = "MoshiFactory";

const JAVA_LANG_OBJECT: &str = "java.lang.Object";

/// How a writer field's value is read off an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// The class declares the field non-privately; reference it by name.
    Direct,
    /// Call a zero-argument accessor method.
    Method(String),
}

/// One field as the emitters consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: JavaType,
    /// Wire name, after naming-annotation overrides.
    pub json_name: String,
    pub nullable: bool,
    pub strategy: FieldStrategy,
    /// Meaningful for writer fields; reader fields are always constructed
    /// positionally and carry [`Accessor::Direct`].
    pub accessor: Accessor,
}

impl FieldDescriptor {
    /// Expression reading this field's value off the `value` parameter.
    pub fn value_expr(&self) -> String {
        match &self.accessor {
            Accessor::Direct => format!("value.{}", self.name),
            Accessor::Method(method) => format!("value.{method}()"),
        }
    }
}

/// One validated class targeted for adapter generation.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    pub package: String,
    pub simple_name: String,
    pub qualified_name: String,
    /// Reader field set: the sole constructor's parameters in declared order.
    pub fields: Vec<FieldDescriptor>,
    /// Writer field set: declared instance fields walked up the superclass
    /// chain. May differ from the reader set.
    pub writer_fields: Vec<FieldDescriptor>,
    pub generates_factory: bool,
    pub generates_writer: bool,
    pub writer_serializes_nulls: bool,
    pub debug_logs: bool,
}

impl ClassDescriptor {
    /// Validate `class` and extract everything emission needs.
    pub fn from_class(class: &ClassDecl, model: &ClassModel) -> GeneratorResult<Self> {
        let qualified_name = class.qualified_name();
        tracing::debug!("building descriptor for {qualified_name}");

        if class.kind != ClassKind::Class {
            return Err(GeneratorError::NotAClass(qualified_name));
        }
        if !class.is_public() {
            return Err(GeneratorError::NotPublic(qualified_name));
        }
        if class.is_abstract() {
            return Err(GeneratorError::Abstract(qualified_name));
        }

        let constructor = sole_constructor(class, &qualified_name)?;
        let package = class
            .package()
            .ok_or_else(|| GeneratorError::NoPackage(qualified_name.clone()))?
            .to_string();

        let marker = class.annotation(GENERATE_MOSHI);
        let generates_factory = marker.is_some_and(|a| a.bool_value("generateFactory", false));
        let generates_writer = marker.is_none_or(|a| a.bool_value("generateWriter", true));
        let writer_serializes_nulls =
            marker.is_some_and(|a| a.bool_value("writerSerializesNulls", false));
        let debug_logs = marker.is_some_and(|a| a.bool_value("debugLogs", false));

        let fields = constructor
            .params
            .iter()
            .map(|param| reader_field(param, &qualified_name))
            .collect::<GeneratorResult<Vec<_>>>()?;

        let writer_fields = collect_writer_fields(class, model, &qualified_name)?;

        Ok(Self {
            package,
            simple_name: class.simple_name.clone(),
            qualified_name,
            fields,
            writer_fields,
            generates_factory,
            generates_writer,
            writer_serializes_nulls,
            debug_logs,
        })
    }

    pub fn adapter_name(&self) -> String {
        naming::adapter_name(&self.simple_name)
    }

    pub fn adapter_qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.adapter_name())
    }
}

/// The sole eligible constructor, after excluding a parcel constructor for
/// parcelable classes.
fn sole_constructor<'a>(
    class: &'a ClassDecl,
    qualified_name: &str,
) -> GeneratorResult<&'a ConstructorDecl> {
    let parcelable = class.is_parcelable();
    let mut sole: Option<&ConstructorDecl> = None;
    for constructor in &class.constructors {
        if parcelable && is_parcel_constructor(constructor) {
            continue;
        }
        if sole.is_some() {
            return Err(GeneratorError::MultipleConstructors(
                qualified_name.to_string(),
            ));
        }
        sole = Some(constructor);
    }

    let constructor =
        sole.ok_or_else(|| GeneratorError::NoConstructor(qualified_name.to_string()))?;
    if constructor.params.is_empty() {
        return Err(GeneratorError::EmptyConstructor(qualified_name.to_string()));
    }
    Ok(constructor)
}

fn is_parcel_constructor(constructor: &ConstructorDecl) -> bool {
    constructor.params.len() == 1
        && matches!(&constructor.params[0].ty, JavaType::Class(name) if name == PARCEL_CLASS)
}

fn reader_field(param: &ParamDecl, qualified_name: &str) -> GeneratorResult<FieldDescriptor> {
    let strategy = select_strategy(&param.ty, qualified_name, &param.name)?;
    Ok(FieldDescriptor {
        name: param.name.clone(),
        ty: param.ty.clone(),
        json_name: resolve_json_name(&param.name, &param.annotations),
        nullable: is_nullable(&param.annotations),
        strategy,
        accessor: Accessor::Direct,
    })
}

fn select_strategy(
    ty: &JavaType,
    qualified_name: &str,
    field: &str,
) -> GeneratorResult<FieldStrategy> {
    FieldStrategy::select(ty).map_err(|primitive| GeneratorError::UnsupportedPrimitive {
        class_name: qualified_name.to_string(),
        field: field.to_string(),
        primitive,
    })
}

/// Wire name after naming-annotation overrides; the second recognized form
/// is consulted only when the first is absent.
fn resolve_json_name(declared: &str, annotations: &[AnnotationUse]) -> String {
    let moshi = annotations
        .iter()
        .find(|a| a.type_name == MOSHI_JSON)
        .and_then(|a| a.string_value("name"));
    if let Some(name) = moshi {
        return name.to_string();
    }

    let gson = annotations
        .iter()
        .find(|a| a.type_name == GSON_SERIALIZED_NAME)
        .and_then(|a| a.string_value("value"));
    if let Some(name) = gson {
        return name.to_string();
    }

    declared.to_string()
}

fn is_nullable(annotations: &[AnnotationUse]) -> bool {
    annotations
        .iter()
        .any(|a| a.type_name == NULLABLE_JETBRAINS || a.type_name == NULLABLE_ANDROID)
}

/// Walk the class and its superclasses collecting the writer field set.
///
/// The walk stops at `java.lang.Object` or at a superclass the snapshot does
/// not contain. Accessor discovery always starts at the annotated class, so
/// a subclass override satisfies an inherited field.
fn collect_writer_fields(
    class: &ClassDecl,
    model: &ClassModel,
    qualified_name: &str,
) -> GeneratorResult<Vec<FieldDescriptor>> {
    let mut fields = Vec::new();
    let mut current = Some(class);
    while let Some(decl) = current {
        for field in &decl.fields {
            if field.is_static() || field.is_transient() {
                continue;
            }
            if !writer_includes(class, field, model) {
                continue;
            }
            let strategy = select_strategy(&field.ty, qualified_name, &field.name)?;
            fields.push(FieldDescriptor {
                name: field.name.clone(),
                ty: field.ty.clone(),
                json_name: resolve_json_name(&field.name, &field.annotations),
                nullable: is_nullable(&field.annotations),
                strategy,
                accessor: resolve_accessor(class, field, model),
            });
        }
        current = superclass_of(decl, model);
    }
    Ok(fields)
}

fn superclass_of<'a>(decl: &ClassDecl, model: &'a ClassModel) -> Option<&'a ClassDecl> {
    decl.superclass
        .as_deref()
        .filter(|name| *name != JAVA_LANG_OBJECT)
        .and_then(|name| model.find(name))
}

/// A field participates in writing when it is public or one of the three
/// accessor forms exists: `get<Capitalized>`, `is<Capitalized>`, or the
/// field's own name.
fn writer_includes(class: &ClassDecl, field: &FieldDecl, model: &ClassModel) -> bool {
    field.is_public()
        || has_getter(class, &naming::getter_name(&field.name), &field.ty, model)
        || has_getter(
            class,
            &format!("is{}", naming::capitalize(&field.name)),
            &field.ty,
            model,
        )
        || has_getter(class, &field.name, &field.ty, model)
}

/// Public zero-argument method with a matching return type, anywhere up the
/// superclass chain.
fn has_getter(class: &ClassDecl, name: &str, ty: &JavaType, model: &ClassModel) -> bool {
    let mut current = Some(class);
    while let Some(decl) = current {
        let found = decl.methods.iter().any(|m| {
            m.name == name
                && m.params.is_empty()
                && m.return_type.as_ref() == Some(ty)
                && m.is_public()
        });
        if found {
            return true;
        }
        current = superclass_of(decl, model);
    }
    false
}

fn has_visible_field(class: &ClassDecl, name: &str) -> bool {
    class
        .fields
        .iter()
        .find(|f| f.name == name)
        .is_some_and(|f| !f.is_private())
}

fn resolve_accessor(class: &ClassDecl, field: &FieldDecl, model: &ClassModel) -> Accessor {
    if has_visible_field(class, &field.name) {
        return Accessor::Direct;
    }
    if field.ty.is_boolean_like() {
        let accessor = naming::boolean_accessor_name(&field.name);
        tracing::debug!("checking if class has getter method with name: {accessor}");
        if has_getter(class, &accessor, &field.ty, model) {
            return Accessor::Method(accessor);
        }
    }
    Accessor::Method(naming::getter_name(&field.name))
}

/// A declared grouping of classes into one dispatch factory.
#[derive(Debug, Clone)]
pub struct FactoryDescriptor {
    pub package: String,
    pub class_name: String,
    /// Member classes in declaration order, by qualified name.
    pub classes: Vec<String>,
    pub debug_logs: bool,
}

/// One factory dispatch entry with its adapter resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryEntry {
    /// Qualified name matched against lookups.
    pub class_name: String,
    /// Qualified name of the adapter to construct on a hit.
    pub adapter: String,
    /// False when the member class is absent from the snapshot and the
    /// adapter name is derived from the qualified name alone.
    pub known: bool,
}

impl FactoryDescriptor {
    /// Build from the factory marker on `class`.
    pub fn from_class(class: &ClassDecl) -> GeneratorResult<Self> {
        let qualified_name = class.qualified_name();
        let marker = class.annotation(GENERATE_MOSHI_FACTORY);

        let classes: Vec<String> = marker
            .map(|a| a.class_list("value").to_vec())
            .unwrap_or_default();
        if classes.is_empty() {
            return Err(GeneratorError::EmptyFactory(qualified_name));
        }

        let class_name = marker
            .and_then(|a| a.string_value("targetClassName"))
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FACTORY_NAME)
            .to_string();

        let package = match marker
            .and_then(|a| a.string_value("targetPackage"))
            .filter(|package| !package.is_empty())
        {
            Some(package) => package.to_string(),
            None => class
                .package()
                .ok_or_else(|| GeneratorError::NoPackage(qualified_name.clone()))?
                .to_string(),
        };

        let debug_logs = marker.is_some_and(|a| a.bool_value("debugLogs", false));

        Ok(Self {
            package,
            class_name,
            classes,
            debug_logs,
        })
    }

    /// The implicit single-class factory emitted alongside an adapter.
    pub fn implicit(class: &ClassDescriptor) -> Self {
        Self {
            package: class.package.clone(),
            class_name: naming::implicit_factory_name(&class.simple_name),
            classes: vec![class.qualified_name.clone()],
            debug_logs: class.debug_logs,
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.class_name)
    }

    /// Resolve each member to its adapter. Members present in the snapshot
    /// resolve through their own package and simple name; absent members fall
    /// back to appending `Adapter` to the qualified name.
    pub fn entries(&self, model: &ClassModel) -> Vec<FactoryEntry> {
        self.classes
            .iter()
            .map(|qualified| {
                let (adapter, known) = match model.find(qualified) {
                    Some(decl) => match decl.package() {
                        Some(package) => (
                            format!("{package}.{}", naming::adapter_name(&decl.simple_name)),
                            true,
                        ),
                        None => (format!("{qualified}Adapter"), true),
                    },
                    None => (format!("{qualified}Adapter"), false),
                };
                FactoryEntry {
                    class_name: qualified.clone(),
                    adapter,
                    known,
                }
            })
            .collect()
    }
}
