//! Single-pass lexical scan for brace and return heuristics

mod diagnostic;
mod scanner;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use scanner::{Scanner, read_source, scan_file};
