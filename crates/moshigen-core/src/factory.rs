//! Emits the Java dispatch factory for a factory descriptor.
//!
//! The factory compares the looked-up type's raw canonical name against each
//! registered class and constructs a fresh adapter on a hit, binding it to
//! the `Moshi` instance the lookup came from. Generic targets therefore
//! match on their raw type. A miss returns null so the context falls through
//! to its other factories.

use crate::descriptor::{FactoryDescriptor, FactoryEntry};
use crate::writer::{SourceFile, SourceWriter};

/// Emit the factory source for `factory` over its resolved `entries`.
pub fn emit(factory: &FactoryDescriptor, entries: &[FactoryEntry]) -> SourceFile {
    let mut w = SourceWriter::new();

    w.line(&format!("package {};", factory.package));
    w.blank();
    w.line("import com.squareup.moshi.JsonAdapter;");
    w.line("import com.squareup.moshi.Moshi;");
    w.line("import com.squareup.moshi.Types;");
    w.blank();
    w.line("import java.lang.annotation.Annotation;");
    w.line("import java.lang.reflect.Type;");
    w.line("import java.util.Set;");
    if factory.debug_logs {
        w.line("import java.util.logging.Level;");
        w.line("import java.util.logging.Logger;");
    }
    w.blank();
    w.line("/**");
    w.line(" * Generated by moshigen. Do not edit.");
    w.line(" */");
    w.open(&format!(
        "public class {} implements JsonAdapter.Factory",
        factory.class_name
    ));
    w.blank();
    if factory.debug_logs {
        w.line(&format!(
            "private static final Logger LOGGER = Logger.getLogger(\"{}.{}\");",
            factory.package, factory.class_name
        ));
        w.blank();
    }
    w.line("@Override");
    w.open(
        "public JsonAdapter<?> create(final Type type, final Set<? extends Annotation> \
         annotations, final Moshi moshi)",
    );
    w.line("final String typeName = Types.getRawType(type).getCanonicalName();");
    if factory.debug_logs {
        w.line("LOGGER.log(Level.FINE, \"Create called for type: {0}\", typeName);");
    }
    for entry in entries {
        w.open(&format!("if (\"{}\".equals(typeName))", entry.class_name));
        if factory.debug_logs {
            w.line("LOGGER.log(Level.FINE, \"Creating adapter for {0}\", typeName);");
        }
        w.line(&format!(
            "return new {}(moshi, this, type, annotations);",
            entry.adapter
        ));
        w.close();
    }
    w.line("return null;");
    w.close();
    w.close();

    SourceFile {
        package: factory.package.clone(),
        type_name: factory.class_name.clone(),
        contents: w.finish(),
    }
}
