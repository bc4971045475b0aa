//! Indent-aware builder for emitted Java source text.
//!
//! Emitted files use tab indentation. The writer tracks the current depth so
//! emitters only deal in statements and block heads, never in whitespace.

use std::path::PathBuf;

/// Accumulates one Java source file line by line.
#[derive(Debug, Default)]
pub struct SourceWriter {
    buf: String,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indent.
    pub fn line(&mut self, line: &str) {
        for _ in 0..self.depth {
            self.buf.push('\t');
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Open a block: emits `head {` and indents subsequent lines.
    pub fn open(&mut self, head: &str) {
        self.line(&format!("{head} {{"));
        self.depth += 1;
    }

    /// Close the innermost block with a bare `}`.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Raise the indent without opening a brace (switch case bodies).
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Lower the indent without closing a brace.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// One emitted source file, ready for the harness to write to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Package the type is declared in.
    pub package: String,
    /// Simple name of the declared type.
    pub type_name: String,
    /// Full source text.
    pub contents: String,
}

impl SourceFile {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.type_name)
    }

    pub fn file_name(&self) -> String {
        format!("{}.java", self.type_name)
    }

    /// Path of the file below an output root, one directory per package
    /// segment: `com.example` + `SimpleAdapter` -> `com/example/SimpleAdapter.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').collect();
        path.push(self.file_name());
        path
    }
}
