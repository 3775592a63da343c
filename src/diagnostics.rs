/*
 * ==========================================================================
 * RAT25F - Single-pass compiler front end
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the RAT25F compiler project.
 * 
 * RAT25F is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license texts are available at:
 *    https://opensource.org/licenses/MIT
 *    https://www.apache.org/licenses/LICENSE-2.0
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use chrono::Local;

use crate::error::RatError;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for Rat25F errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is inspired by `rustc` diagnostics, simplified, and readable
/// without color.
pub struct DiagnosticPrinter {
    /// Full source code of the file being compiled.
    source: String,

    /// Name of the source file (e.g. `main.rat25`), for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[R0004]: Identifier 'y' not declared.
    ///   --> loop.rat25:5:3
    ///    |
    ///   5 |   y = y + 1;
    ///    |   ^
    ///
    /// help: declare it in the declaration list before the first statement
    /// ```
    ///
    /// Errors without a location (I/O, end of input) get the header only.
    pub fn render(&self, error: &RatError) -> String {
        let mut out = format!("error[{}]: {}", error.code, error.message);

        match error.span {
            Some(span) => {
                let lines: Vec<&str> = self.source.lines().collect();

                // Lines are 1-indexed in diagnostics, vectors 0-indexed.
                let src_line = lines.get(span.line.saturating_sub(1)).unwrap_or(&"");

                out.push_str(&format!(
                    "\n  --> {}:{}:{}",
                    self.file_name,
                    span.line,
                    span.column + 1
                ));
                out.push_str("\n   |");
                out.push_str(&format!("\n{:>3} | {}", span.line, src_line));
                out.push_str(&format!("\n   | {}^", " ".repeat(span.column)));
            }
            None => {
                out.push_str(&format!("\n  --> {}", self.file_name));
                if error.kind.is_parse_error() && error.token.is_none() {
                    out.push_str(" (end of input)");
                }
            }
        }

        if let Some(help) = &error.help {
            out.push_str(&format!("\n\nhelp: {}", help));
        }

        out
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &RatError) {
        eprintln!("{}", self.render(error));
    }
}

/// Timestamped progress line on stderr, printed only when `verbose` is set.
pub fn progress(verbose: bool, message: impl AsRef<str>) {
    if verbose {
        eprintln!("[{}] {}", Local::now().format("%H:%M:%S%.3f"), message.as_ref());
    }
}
