//! Per-field read/write strategy selection and statement emission.
//!
//! Every declared field type maps to exactly one of three strategies, checked
//! in order:
//!
//! 1. **Primitive**: kinds the streaming reader has a method for
//!    (`nextBoolean`, `nextInt`, `nextLong`, `nextDouble`; `short` and
//!    `float` narrow from the wider read). `byte` and `char` have no reader
//!    method and fail selection.
//! 2. **String**: read/written directly.
//! 3. **Delegated**: everything else resolves another adapter through the
//!    conversion context at runtime.

use crate::descriptor::FieldDescriptor;
use crate::types::{JavaType, PrimitiveType};
use crate::writer::SourceWriter;

/// Primitive kinds with a direct streaming read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Boolean,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Reader invocation yielding this kind, narrowing casts included.
    fn read_expr(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "reader.nextBoolean()",
            PrimitiveKind::Short => "(short)reader.nextInt()",
            PrimitiveKind::Int => "reader.nextInt()",
            PrimitiveKind::Long => "reader.nextLong()",
            PrimitiveKind::Float => "(float)reader.nextDouble()",
            PrimitiveKind::Double => "reader.nextDouble()",
        }
    }

    fn boxed_name(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Int => "Integer",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
        }
    }
}

/// The closed set of per-field conversion strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStrategy {
    Primitive(PrimitiveKind),
    String,
    Delegated,
}

impl FieldStrategy {
    /// Select the strategy for a declared type, boxed or not.
    ///
    /// `Err` carries the keyword of an unsupported primitive; the caller
    /// turns it into a validation error before anything is emitted.
    pub fn select(ty: &JavaType) -> Result<FieldStrategy, &'static str> {
        match ty {
            JavaType::Primitive(p) | JavaType::Boxed(p) => match p {
                PrimitiveType::Boolean => Ok(FieldStrategy::Primitive(PrimitiveKind::Boolean)),
                PrimitiveType::Short => Ok(FieldStrategy::Primitive(PrimitiveKind::Short)),
                PrimitiveType::Int => Ok(FieldStrategy::Primitive(PrimitiveKind::Int)),
                PrimitiveType::Long => Ok(FieldStrategy::Primitive(PrimitiveKind::Long)),
                PrimitiveType::Float => Ok(FieldStrategy::Primitive(PrimitiveKind::Float)),
                PrimitiveType::Double => Ok(FieldStrategy::Primitive(PrimitiveKind::Double)),
                PrimitiveType::Byte => Err("byte"),
                PrimitiveType::Char => Err("char"),
            },
            JavaType::String => Ok(FieldStrategy::String),
            _ => Ok(FieldStrategy::Delegated),
        }
    }
}

/// Emit the statements consuming one JSON value into the field's holding
/// slot. Nullable fields peek for a JSON null before the typed read.
pub fn emit_read(w: &mut SourceWriter, field: &FieldDescriptor, debug_logs: bool) {
    match field.strategy {
        FieldStrategy::Primitive(kind) => {
            if field.nullable {
                w.line(&format!(
                    "{name} = (reader.peek() == JsonReader.Token.NULL) ? reader.<{boxed}>nextNull() : {boxed}.valueOf({read});",
                    name = field.name,
                    boxed = kind.boxed_name(),
                    read = kind.read_expr(),
                ));
            } else {
                w.line(&format!("{} = {};", field.name, kind.read_expr()));
            }
        }
        FieldStrategy::String => {
            if field.nullable {
                w.line(&format!(
                    "{} = (reader.peek() == JsonReader.Token.NULL) ? reader.<String>nextNull() : reader.nextString();",
                    field.name,
                ));
            } else {
                w.line(&format!("{} = reader.nextString();", field.name));
            }
        }
        FieldStrategy::Delegated => {
            w.line("{");
            w.indent();
            w.line(&format!(
                "final JsonAdapter<{ty}> _adapter = moshi.adapter({expr});",
                ty = field.ty.java_name(),
                expr = field.ty.runtime_type_expr(),
            ));
            if debug_logs {
                w.line(r#"LOGGER.log(Level.FINE, "\tGot delegate adapter: {0}", _adapter);"#);
            }
            w.line(&format!("{} = _adapter.fromJson(reader);", field.name));
            if debug_logs {
                w.line(&format!(
                    r#"LOGGER.log(Level.FINE, "\tGot model data: {{0}}", {});"#,
                    field.name,
                ));
            }
            w.dedent();
            w.line("}");
        }
    }
}

/// Emit the statements serializing `value_expr` for the field. The caller
/// has already written the field name and, for skip-null fields, extracted
/// the value into a non-null temporary.
pub fn emit_write(
    w: &mut SourceWriter,
    field: &FieldDescriptor,
    value_expr: &str,
    debug_logs: bool,
) {
    match field.strategy {
        FieldStrategy::Primitive(_) | FieldStrategy::String => {
            w.line(&format!("writer.value({value_expr});"));
        }
        FieldStrategy::Delegated => {
            w.line("{");
            w.indent();
            w.line(&format!(
                "final JsonAdapter<{ty}> _adapter = moshi.adapter({expr});",
                ty = field.ty.java_name(),
                expr = field.ty.runtime_type_expr(),
            ));
            if debug_logs {
                w.line(r#"LOGGER.log(Level.FINE, "\tGot delegate adapter: {0}", _adapter);"#);
            }
            w.line(&format!("_adapter.toJson(writer, {value_expr});"));
            w.dedent();
            w.line("}");
        }
    }
}
