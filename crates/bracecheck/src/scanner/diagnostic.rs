//! Diagnostic records emitted by the scanner

use crate::common::Span;
use std::fmt;

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A `}` encountered while the running level was already 0
    ExtraClosingBrace,
    /// A line containing `return` at level 0 without `function`
    IllegalReturn,
}

/// A suspicious line flagged by the scan
///
/// Diagnostics are informational. They never abort the scan and have no
/// effect on the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line number
    pub line: usize,
    /// Offending line with leading/trailing whitespace trimmed
    pub text: String,
    /// Byte range of the trigger: the `}` itself, or the first `return`
    /// occurrence on the line
    pub span: Span,
}

impl Diagnostic {
    pub fn extra_closing_brace(line: usize, text: &str, span: Span) -> Self {
        Self {
            kind: DiagnosticKind::ExtraClosingBrace,
            line,
            text: text.trim().to_string(),
            span,
        }
    }

    pub fn illegal_return(line: usize, text: &str, span: Span) -> Self {
        Self {
            kind: DiagnosticKind::IllegalReturn,
            line,
            text: text.trim().to_string(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::ExtraClosingBrace => {
                write!(f, "Extra closing brace at line {}: {}", self.line, self.text)
            }
            DiagnosticKind::IllegalReturn => {
                write!(
                    f,
                    "Illegal return statement at line {}: {}",
                    self.line, self.text
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extra_closing_brace_message() {
        let d = Diagnostic::extra_closing_brace(3, "  }  \n", Span::new(10, 11));
        assert_eq!(d.to_string(), "Extra closing brace at line 3: }");
    }

    #[test]
    fn test_illegal_return_message() {
        let d = Diagnostic::illegal_return(1, "return 5\n", Span::new(0, 6));
        assert_eq!(d.to_string(), "Illegal return statement at line 1: return 5");
    }

    #[test]
    fn test_text_is_trimmed() {
        let d = Diagnostic::illegal_return(7, "\treturn x;\r\n", Span::new(1, 7));
        assert_eq!(d.text, "return x;");
    }
}
