//! Code writer for generating properly indented source text.

use super::Indent;

/// Fluent writer for building source text with proper indentation.
///
/// All methods consume and return `Self` so emission reads as a chain.
///
/// # Example
///
/// ```
/// use clientgen_codegen::CodeWriter;
///
/// let code = CodeWriter::csharp()
///     .line("public class Foo")
///     .line("{")
///     .indent()
///     .line("public int Bar { get; set; }")
///     .dedent()
///     .line("}")
///     .finish();
///
/// assert_eq!(
///     code,
///     "public class Foo\n{\n    public int Bar { get; set; }\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeWriter {
    /// Create a new writer with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new writer with 4-space indentation (C# default).
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add multiple lines, each with current indentation. Empty entries
    /// produce blank lines.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref();
            self = if line.is_empty() {
                self.blank()
            } else {
                self.line(line)
            };
        }
        self
    }

    /// Add a line only when the condition holds.
    pub fn line_if(self, condition: bool, s: &str) -> Self {
        if condition { self.line(s) } else { self }
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add a blank line only when the condition holds.
    pub fn blank_if(self, condition: bool) -> Self {
        if condition { self.blank() } else { self }
    }

    /// Append an inline fragment without terminating the line. The first
    /// fragment of a line receives the current indentation; the line stays
    /// open until [`CodeWriter::end_line`] is called.
    pub fn partial(mut self, s: &str) -> Self {
        if self.at_line_start() {
            self.write_indent();
        }
        self.buffer.push_str(s);
        self
    }

    /// Append an inline fragment only when the condition holds.
    pub fn partial_if(self, condition: bool, s: &str) -> Self {
        if condition { self.partial(s) } else { self }
    }

    /// Terminate the currently open line.
    pub fn end_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with automatic indentation around the body.
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let writer = self.line(header).indent();
        f(writer).dedent()
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use clientgen_codegen::CodeWriter;
    ///
    /// let code = CodeWriter::csharp()
    ///     .block_with_close("{", "}", |w| w.line("return;"))
    ///     .finish();
    ///
    /// assert_eq!(code, "{\n    return;\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let writer = self.line(header).indent();
        f(writer).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Iterate with the item index, for interleaving separators.
    pub fn each_indexed<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, usize, T) -> Self,
    {
        for (index, item) in items.into_iter().enumerate() {
            self = f(self, index, item);
        }
        self
    }

    /// Get a reference to the accumulated text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the accumulated text.
    pub fn finish(self) -> String {
        self.buffer
    }

    fn at_line_start(&self) -> bool {
        self.buffer.is_empty() || self.buffer.ends_with('\n')
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::csharp()
    }
}
