#![allow(non_snake_case)]

use super::*;
use crate::codec::FieldStrategy;
use crate::descriptor::{Accessor, FieldDescriptor};
use crate::types::{JavaType, PrimitiveType};

fn field(name: &str, ty: JavaType, nullable: bool) -> FieldDescriptor {
    let strategy = FieldStrategy::select(&ty).unwrap();
    FieldDescriptor {
        name: name.to_string(),
        json_name: name.to_string(),
        ty,
        nullable,
        strategy,
        accessor: Accessor::Direct,
    }
}

fn method_field(name: &str, ty: JavaType, nullable: bool, method: &str) -> FieldDescriptor {
    FieldDescriptor {
        accessor: Accessor::Method(method.to_string()),
        ..field(name, ty, nullable)
    }
}

fn simple(fields: Vec<FieldDescriptor>, writer_fields: Vec<FieldDescriptor>) -> ClassDescriptor {
    ClassDescriptor {
        package: "com.example".to_string(),
        simple_name: "Simple".to_string(),
        qualified_name: "com.example.Simple".to_string(),
        fields,
        writer_fields,
        generates_factory: false,
        generates_writer: true,
        writer_serializes_nulls: false,
        debug_logs: false,
    }
}

fn string_field(name: &str) -> FieldDescriptor {
    field(name, JavaType::String, false)
}

#[test]
fn emit___single_required_string___full_source_shape() {
    let class = simple(vec![string_field("name")], vec![string_field("name")]);

    let file = emit(&class);
    assert_eq!(file.package, "com.example");
    assert_eq!(file.type_name, "SimpleAdapter");

    let expected = "\
package com.example;

import com.squareup.moshi.JsonAdapter;
import com.squareup.moshi.JsonReader;
import com.squareup.moshi.JsonWriter;
import com.squareup.moshi.Moshi;

import java.io.IOException;
import java.lang.annotation.Annotation;
import java.lang.reflect.Type;
import java.util.Set;

/**
 * Generated by moshigen. Do not edit.
 */
public class SimpleAdapter extends JsonAdapter<com.example.Simple> {

\tprivate final Moshi moshi;
\tprivate final JsonAdapter.Factory factory;
\tprivate final Type type;
\tprivate final Set<? extends Annotation> annotations;

\tpublic SimpleAdapter(final Moshi moshi, final JsonAdapter.Factory factory, final Type type, final Set<? extends Annotation> annotations) {
\t\tthis.moshi = moshi;
\t\tthis.factory = factory;
\t\tthis.type = type;
\t\tthis.annotations = annotations;
\t}

\t@Override
\tpublic com.example.Simple fromJson(final JsonReader reader) throws IOException {
\t\tif (reader.peek() == JsonReader.Token.NULL) {
\t\t\treturn reader.nextNull();
\t\t}
\t\tString name = null;
\t\treader.beginObject();
\t\twhile (reader.hasNext()) {
\t\t\tfinal String _name = reader.nextName();
\t\t\tswitch (_name) {
\t\t\t\tcase \"name\":
\t\t\t\t\tname = reader.nextString();
\t\t\t\t\tbreak;
\t\t\t\tdefault:
\t\t\t\t\treader.skipValue();
\t\t\t}
\t\t}
\t\treader.endObject();
\t\tif (name == null) {
\t\t\tthrow new IOException(\"name is non-optional but was not found in the json\");
\t\t}
\t\treturn new com.example.Simple(name);
\t}

\t@Override
\tpublic void toJson(final JsonWriter writer, final com.example.Simple value) throws IOException {
\t\tif (value == null) {
\t\t\twriter.nullValue();
\t\t\treturn;
\t\t}
\t\twriter.beginObject();
\t\twriter.name(\"name\");
\t\twriter.value(value.name);
\t\twriter.endObject();
\t}
}
";
    assert_eq!(file.contents, expected);
}

#[test]
fn emit___mixed_fields___boxed_slots_and_positional_constructor() {
    let class = simple(
        vec![
            string_field("name"),
            field("age", JavaType::Primitive(PrimitiveType::Int), false),
            field("registered", JavaType::Primitive(PrimitiveType::Boolean), false),
        ],
        vec![],
    );

    let code = emit(&class).contents;
    assert!(code.contains("String name = null;"));
    assert!(code.contains("Integer age = null;"));
    assert!(code.contains("Boolean registered = null;"));
    assert!(code.contains("return new com.example.Simple(name, age, registered);"));
}

#[test]
fn emit___nullable_field___no_required_check() {
    let class = simple(
        vec![
            string_field("name"),
            field("nickname", JavaType::String, true),
        ],
        vec![],
    );

    let code = emit(&class).contents;
    assert!(code.contains("if (name == null)"));
    assert!(!code.contains("if (nickname == null)"));
    assert!(!code.contains("nickname is non-optional"));
}

#[test]
fn emit___wire_name_override___switch_and_error_use_wire_name() {
    let mut renamed = string_field("firstName");
    renamed.json_name = "first_name".to_string();
    let class = simple(vec![renamed.clone()], vec![renamed]);

    let code = emit(&class).contents;
    assert!(code.contains("case \"first_name\":"));
    assert!(code.contains(
        "throw new IOException(\"first_name is non-optional but was not found in the json\");"
    ));
    assert!(code.contains("writer.name(\"first_name\");"));
    // The declared name still names the slot and the constructor argument.
    assert!(code.contains("String firstName = null;"));
    assert!(code.contains("return new com.example.Simple(firstName);"));
}

#[test]
fn emit___unknown_keys___skipped() {
    let class = simple(vec![string_field("name")], vec![]);

    let code = emit(&class).contents;
    assert!(code.contains("default:"));
    assert!(code.contains("reader.skipValue();"));
}

#[test]
fn emit___delegated_field___adapter_resolved_inside_case() {
    let tags = field(
        "tags",
        JavaType::Parameterized {
            raw: "java.util.List".to_string(),
            args: vec![JavaType::String],
        },
        false,
    );
    let class = simple(vec![tags], vec![]);

    let code = emit(&class).contents;
    assert!(code.contains(
        "final JsonAdapter<java.util.List<String>> _adapter = \
         moshi.adapter(com.squareup.moshi.Types.newParameterizedType(java.util.List.class, \
         String.class));"
    ));
    assert!(code.contains("tags = _adapter.fromJson(reader);"));
}

#[test]
fn emit___writer_accessor_method___called_on_value() {
    let class = simple(
        vec![string_field("name")],
        vec![method_field("name", JavaType::String, false, "getName")],
    );

    let code = emit(&class).contents;
    assert!(code.contains("writer.value(value.getName());"));
}

#[test]
fn emit___nullable_writer_field___skipped_through_temporary() {
    let class = simple(
        vec![],
        vec![method_field(
            "age",
            JavaType::Boxed(PrimitiveType::Int),
            true,
            "getAge",
        )],
    );

    let code = emit(&class).contents;
    assert!(code.contains("final Integer _age = value.getAge();"));
    assert!(code.contains("if (_age != null) {"));
    assert!(code.contains("writer.value(_age);"));
}

#[test]
fn emit___writer_serializes_nulls___writes_unconditionally() {
    let mut class = simple(
        vec![],
        vec![method_field(
            "age",
            JavaType::Boxed(PrimitiveType::Int),
            true,
            "getAge",
        )],
    );
    class.writer_serializes_nulls = true;

    let code = emit(&class).contents;
    assert!(!code.contains("_age"));
    assert!(code.contains("writer.name(\"age\");"));
    assert!(code.contains("writer.value(value.getAge());"));
}

#[test]
fn emit___generate_writer_false___delegates_whole_body() {
    let mut class = simple(vec![string_field("name")], vec![string_field("name")]);
    class.generates_writer = false;

    let code = emit(&class).contents;
    assert!(code.contains("moshi.nextAdapter(factory, type, annotations).toJson(writer, value);"));
    assert!(!code.contains("writer.beginObject();"));
    // Reading is unaffected.
    assert!(code.contains("reader.beginObject();"));
}

#[test]
fn emit___debug_logs___logger_statements_present() {
    let mut class = simple(vec![string_field("name")], vec![string_field("name")]);
    class.debug_logs = true;

    let code = emit(&class).contents;
    assert!(code.contains("import java.util.logging.Level;"));
    assert!(code.contains("import java.util.logging.Logger;"));
    assert!(code.contains(
        "private static final Logger LOGGER = Logger.getLogger(\"com.example.SimpleAdapter\");"
    ));
    assert!(code.contains("LOGGER.log(Level.FINE, \"Constructing SimpleAdapter\");"));
    assert!(code.contains("LOGGER.log(Level.FINE, \"Reading json\");"));
    assert!(code.contains("LOGGER.log(Level.FINE, \"\\tGot name: {0}\", _name);"));
    assert!(code.contains("LOGGER.log(Level.FINE, \"Writing json\");"));
}

#[test]
fn emit___no_debug_logs___no_logger_anywhere() {
    let class = simple(vec![string_field("name")], vec![string_field("name")]);

    let code = emit(&class).contents;
    assert!(!code.contains("Logger"));
    assert!(!code.contains("LOGGER"));
}

#[test]
fn emit___reader_and_writer_sets_differ___each_used_in_its_method() {
    let class = simple(
        vec![string_field("name")],
        vec![method_field("label", JavaType::String, false, "getLabel")],
    );

    let code = emit(&class).contents;
    assert!(code.contains("case \"name\":"));
    assert!(!code.contains("case \"label\":"));
    assert!(code.contains("writer.name(\"label\");"));
    assert!(!code.contains("writer.name(\"name\");"));
}

#[test]
fn emit___file_lands_in_package_directory() {
    let class = simple(vec![string_field("name")], vec![]);

    let file = emit(&class);
    assert_eq!(
        file.relative_path(),
        std::path::PathBuf::from("com/example/SimpleAdapter.java")
    );
}
