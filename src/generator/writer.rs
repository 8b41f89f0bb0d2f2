//! Indented text emission with a scope stack.
//!
//! Every `{` is opened through [`SourceWriter::open`] and closed through
//! [`SourceWriter::close`], so nesting depth and brace balance cannot drift
//! apart no matter how deep containment goes.

use std::fmt::Write;

use super::options::IndentStyle;

pub struct SourceWriter {
    output: String,
    indent: IndentStyle,
    /// Headers of the currently open scopes, innermost last.
    scopes: Vec<String>,
}

impl SourceWriter {
    pub fn new(indent: IndentStyle) -> Self {
        Self {
            output: String::new(),
            indent,
            scopes: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Write one line at the current depth. An empty line carries no
    /// indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.output.push('\n');
        } else {
            let indent = self.indent.indent(self.depth());
            let _ = writeln!(self.output, "{}{}", indent, text);
        }
    }

    pub fn blank_line(&mut self) {
        self.output.push('\n');
    }

    /// Write `header`, then `{` on its own line, and enter the scope.
    pub fn open(&mut self, header: impl Into<String>) {
        let header = header.into();
        self.line(&header);
        self.line("{");
        self.scopes.push(header);
    }

    /// Leave the innermost scope. Returns its header, or `None` when no
    /// scope is open.
    pub fn close(&mut self) -> Option<String> {
        let header = self.scopes.pop()?;
        self.line("}");
        Some(header)
    }

    pub fn close_all(&mut self) {
        while self.close().is_some() {}
    }

    /// Close any open scopes and return the text.
    pub fn finish(mut self) -> String {
        self.close_all();
        self.output
    }
}
