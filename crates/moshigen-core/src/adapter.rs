//! Emits the Java adapter class for one validated descriptor.
//!
//! One descriptor produces one `<Simple>Adapter` source file: a
//! `JsonAdapter` subclass with a streaming `fromJson` keyed on wire names
//! and a `toJson` over the writer field set. Nothing here can fail; every
//! rejection happened during descriptor construction.

use crate::codec;
use crate::descriptor::ClassDescriptor;
use crate::writer::{SourceFile, SourceWriter};

/// Emit the adapter source for `class`.
pub fn emit(class: &ClassDescriptor) -> SourceFile {
    let adapter_name = class.adapter_name();
    let mut w = SourceWriter::new();

    w.line(&format!("package {};", class.package));
    w.blank();
    w.line("import com.squareup.moshi.JsonAdapter;");
    w.line("import com.squareup.moshi.JsonReader;");
    w.line("import com.squareup.moshi.JsonWriter;");
    w.line("import com.squareup.moshi.Moshi;");
    w.blank();
    w.line("import java.io.IOException;");
    w.line("import java.lang.annotation.Annotation;");
    w.line("import java.lang.reflect.Type;");
    w.line("import java.util.Set;");
    if class.debug_logs {
        w.line("import java.util.logging.Level;");
        w.line("import java.util.logging.Logger;");
    }
    w.blank();
    w.line("/**");
    w.line(" * Generated by moshigen. Do not edit.");
    w.line(" */");
    w.open(&format!(
        "public class {adapter_name} extends JsonAdapter<{}>",
        class.qualified_name
    ));
    w.blank();
    if class.debug_logs {
        w.line(&format!(
            "private static final Logger LOGGER = Logger.getLogger(\"{}.{adapter_name}\");",
            class.package
        ));
        w.blank();
    }
    w.line("private final Moshi moshi;");
    w.line("private final JsonAdapter.Factory factory;");
    w.line("private final Type type;");
    w.line("private final Set<? extends Annotation> annotations;");
    w.blank();
    w.open(&format!(
        "public {adapter_name}(final Moshi moshi, final JsonAdapter.Factory factory, \
         final Type type, final Set<? extends Annotation> annotations)"
    ));
    if class.debug_logs {
        w.line(&format!(
            "LOGGER.log(Level.FINE, \"Constructing {adapter_name}\");"
        ));
    }
    w.line("this.moshi = moshi;");
    w.line("this.factory = factory;");
    w.line("this.type = type;");
    w.line("this.annotations = annotations;");
    w.close();
    w.blank();
    emit_from_json(&mut w, class);
    w.blank();
    emit_to_json(&mut w, class);
    w.close();

    SourceFile {
        package: class.package.clone(),
        type_name: adapter_name,
        contents: w.finish(),
    }
}

fn emit_from_json(w: &mut SourceWriter, class: &ClassDescriptor) {
    w.line("@Override");
    w.open(&format!(
        "public {} fromJson(final JsonReader reader) throws IOException",
        class.qualified_name
    ));
    if class.debug_logs {
        w.line("LOGGER.log(Level.FINE, \"Reading json\");");
    }

    // Top-level null is symmetric with the writer's null handling.
    w.open("if (reader.peek() == JsonReader.Token.NULL)");
    w.line("return reader.nextNull();");
    w.close();

    // Boxed slots so "seen in the json" is distinguishable from a default.
    for field in &class.fields {
        w.line(&format!(
            "{} {} = null;",
            field.ty.boxed().java_name(),
            field.name
        ));
    }

    w.line("reader.beginObject();");
    w.open("while (reader.hasNext())");
    w.line("final String _name = reader.nextName();");
    if class.debug_logs {
        w.line("LOGGER.log(Level.FINE, \"\\tGot name: {0}\", _name);");
    }
    w.open("switch (_name)");
    for field in &class.fields {
        w.line(&format!("case \"{}\":", field.json_name));
        w.indent();
        codec::emit_read(w, field, class.debug_logs);
        w.line("break;");
        w.dedent();
    }
    w.line("default:");
    w.indent();
    w.line("reader.skipValue();");
    w.dedent();
    w.close();
    w.close();
    w.line("reader.endObject();");

    for field in &class.fields {
        if field.nullable {
            continue;
        }
        w.open(&format!("if ({} == null)", field.name));
        w.line(&format!(
            "throw new IOException(\"{} is non-optional but was not found in the json\");",
            field.json_name
        ));
        w.close();
    }

    let args = class
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    w.line(&format!("return new {}({args});", class.qualified_name));
    w.close();
}

fn emit_to_json(w: &mut SourceWriter, class: &ClassDescriptor) {
    w.line("@Override");
    w.open(&format!(
        "public void toJson(final JsonWriter writer, final {} value) throws IOException",
        class.qualified_name
    ));
    if class.debug_logs {
        w.line("LOGGER.log(Level.FINE, \"Writing json\");");
    }

    if !class.generates_writer {
        // The declaration opted out of a generated writer; defer to whatever
        // adapter the context would have chosen without this one.
        w.line("moshi.nextAdapter(factory, type, annotations).toJson(writer, value);");
        w.close();
        return;
    }

    w.open("if (value == null)");
    w.line("writer.nullValue();");
    w.line("return;");
    w.close();
    w.line("writer.beginObject();");
    for field in &class.writer_fields {
        if class.writer_serializes_nulls || !field.nullable {
            w.line(&format!("writer.name(\"{}\");", field.json_name));
            codec::emit_write(w, field, &field.value_expr(), class.debug_logs);
        } else {
            // Nullable fields are skipped entirely when unset; the accessor
            // runs once so the null check and the write agree.
            let temp = format!("_{}", field.name);
            w.line(&format!(
                "final {} {temp} = {};",
                field.ty.boxed().java_name(),
                field.value_expr()
            ));
            w.open(&format!("if ({temp} != null)"));
            w.line(&format!("writer.name(\"{}\");", field.json_name));
            codec::emit_write(w, field, &temp, class.debug_logs);
            w.close();
        }
    }
    w.line("writer.endObject();");
    w.close();
}

#[cfg(test)]
#[path = "adapter/adapter_tests.rs"]
mod adapter_tests;
