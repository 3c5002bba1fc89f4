//! Diagnostic presentation
//!
//! The plain format is the tool's contract: one line per diagnostic on
//! stdout, nothing else. The annotated renderer is an opt-in alternative
//! that shows the offending source with a label on the trigger.

use crate::scanner::{Diagnostic, DiagnosticKind};
use codespan_reporting::diagnostic::{Diagnostic as Annotated, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use std::io::{self, Write};

/// Print diagnostics in the plain one-line-per-diagnostic format
pub fn print_plain<W: Write>(out: &mut W, diagnostics: &[Diagnostic]) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "{}", diagnostic)?;
    }
    Ok(())
}

/// Renderer for annotated source output
pub struct PrettyReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl PrettyReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    /// Emit one diagnostic as a warning with a primary label on its span
    pub fn report(&self, file_id: usize, diagnostic: &Diagnostic) {
        let (message, label) = match diagnostic.kind {
            DiagnosticKind::ExtraClosingBrace => (
                "extra closing brace",
                "no opening brace matches this one",
            ),
            DiagnosticKind::IllegalReturn => (
                "illegal return statement",
                "return outside of anything resembling a function",
            ),
        };

        let annotated = Annotated::warning().with_message(message).with_labels(vec![
            Label::primary(file_id, diagnostic.span.start..diagnostic.span.end)
                .with_message(label),
        ]);

        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &annotated);
    }
}

impl Default for PrettyReporter {
    fn default() -> Self {
        Self::new()
    }
}
