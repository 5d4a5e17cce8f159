//! Structured writer for generated source text.

mod code_writer;
mod indent;

pub use code_writer::CodeWriter;
pub use indent::Indent;
