//! Naive lexical lint for unmatched closing braces and stray `return`s
//!
//! This library scans a single source file line by line with one running
//! brace counter and flags two suspicious patterns:
//! - a `}` that would drive the nesting level negative, and
//! - a line containing `return` while the level is zero and the line does
//!   not also contain `function`.
//!
//! It is deliberately not a parser: string literals, comments, and language
//! syntax are invisible to it. The substring heuristics and their known
//! imprecision are the intended behavior.
//!
//! ## Architecture
//!
//! The crate is organized into:
//! - **Scanner** (`scanner/`): the single-pass scan and its diagnostics
//! - **Report** (`report`): plain and annotated diagnostic rendering
//! - **Common** (`common/`): shared infrastructure (errors, spans)

pub mod common;
pub mod report;
pub mod scanner;

// Re-exports for convenience
pub use common::{ScanError, ScanResult, Span};
pub use scanner::{Diagnostic, DiagnosticKind, Scanner, read_source, scan_file};
