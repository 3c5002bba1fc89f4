//! The scan itself: one pass, one counter, two heuristics

use super::diagnostic::Diagnostic;
use crate::common::{ScanResult, Span};
use std::fs;
use std::path::Path;

/// Read a file and decode it as UTF-8
///
/// IO failure and decoding failure surface as distinct [`ScanError`]
/// variants; both happen before any scanning.
///
/// [`ScanError`]: crate::common::ScanError
pub fn read_source(path: &Path) -> ScanResult<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

/// Scan a file and return its diagnostics in detection order
pub fn scan_file(path: &Path) -> ScanResult<Vec<Diagnostic>> {
    let source = read_source(path)?;
    Ok(Scanner::new().scan(&source))
}

/// Single-pass lexical scanner
///
/// Maintains one signed counter approximating brace nesting depth. Braces
/// inside string literals and comments count like any other character, and
/// the `return`/`function` checks are raw substring matches; the scan has
/// no notion of any language's syntax.
pub struct Scanner {
    level: i32,
    diagnostics: Vec<Diagnostic>,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            level: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Scan the whole source, consuming the scanner
    ///
    /// Lines are split terminator-inclusive so the substring checks see
    /// each line exactly as it appears in the file; a final line without a
    /// terminator is still a line.
    pub fn scan(mut self, source: &str) -> Vec<Diagnostic> {
        let mut offset = 0;
        for (idx, line) in source.split_inclusive('\n').enumerate() {
            self.scan_line(idx + 1, line, offset);
            offset += line.len();
        }
        self.diagnostics
    }

    /// Process one line: braces first, then the return check
    ///
    /// `offset` is the byte position of the line start within the source,
    /// used only to give diagnostics a span.
    fn scan_line(&mut self, line_num: usize, line: &str, offset: usize) {
        for (i, ch) in line.char_indices() {
            match ch {
                '{' => self.level += 1,
                '}' => {
                    self.level -= 1;
                    if self.level < 0 {
                        let span = Span::new(offset + i, offset + i + 1);
                        self.diagnostics
                            .push(Diagnostic::extra_closing_brace(line_num, line, span));
                        // Reset so one stray brace does not cascade into
                        // diagnostics on every following line
                        self.level = 0;
                    }
                }
                _ => {}
            }
        }

        // The level is judged after this line's own braces, so `{ return }`
        // on a single line still counts as level 0.
        if self.level == 0 && !line.contains("function") {
            if let Some(pos) = line.find("return") {
                let span = Span::new(offset + pos, offset + pos + "return".len());
                self.diagnostics
                    .push(Diagnostic::illegal_return(line_num, line, span));
            }
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
