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

use std::fmt;

use serde::Serialize;

use crate::codegen::{BackpatchStack, Instruction, InstructionStream, SymbolEntry, SymbolTable};
use crate::config::{CompileOptions, Mode};
use crate::error::RatError;
use crate::lexer::token::Token;
use crate::parser::trace::Trace;

/// The Rat25F predictive recursive-descent parser and translator.
///
/// One `Parser` is one parse session. It owns everything the session
/// mutates:
/// - The token stream and the cursor into it
/// - The symbol table
/// - The instruction stream
/// - The backpatch stack of unresolved forward jumps
/// - The production trace
///
/// The grammar itself is implemented through extension modules
/// (`program`, `statements`, `expressions`, `helpers`) via additional
/// `impl Parser` blocks. Each nonterminal is one method, and code is emitted
/// while the production is being recognised. No tree is built.
pub struct Parser {
    /// Complete list of tokens to be parsed.
    pub(crate) tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub(crate) current: usize,

    pub(crate) mode: Mode,
    pub(crate) symbols: SymbolTable,
    pub(crate) code: InstructionStream,
    pub(crate) backpatch: BackpatchStack,
    pub(crate) trace: Trace,
}

/// Everything a finished parse session leaves behind.
#[derive(Debug, Clone, Serialize)]
pub struct Artifacts {
    pub mode: Mode,

    /// Production trace, in derivation order.
    pub trace: Vec<String>,

    /// Instruction listing, addresses `1..=n`. Empty in syntax-only mode.
    pub instructions: Vec<Instruction>,

    /// Symbol table in declaration order. Empty in syntax-only mode.
    pub symbols: Vec<SymbolEntry>,
}

/// A failed compilation: the one fatal error plus whatever had been
/// produced up to that point.
///
/// The partial artifacts are for inspection only; they are never a valid
/// program.
#[derive(Debug, Clone)]
pub struct Failure {
    pub error: RatError,
    pub partial: Artifacts,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Public entry point for the parsing / translation phase.
///
/// # Compilation Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser/Translator → (trace, instructions, symbols)
/// ```
///
/// # Example
/// ```rust
/// use rat25f::{config::CompileOptions, lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("# integer x; x = 10; put(x); #").unwrap();
/// let artifacts = parse(tokens, &CompileOptions::default()).unwrap();
/// assert_eq!(artifacts.instructions.len(), 4);
/// ```
pub fn parse(tokens: Vec<Token>, options: &CompileOptions) -> Result<Artifacts, Failure> {
    Parser::new(tokens, options).run()
}

impl Parser {
    pub fn new(tokens: Vec<Token>, options: &CompileOptions) -> Self {
        Self {
            tokens,
            current: 0,
            mode: options.mode,
            symbols: SymbolTable::with_base(options.memory_base),
            code: InstructionStream::new(),
            backpatch: BackpatchStack::new(),
            trace: Trace::new(options.trace),
        }
    }

    /// Parses the whole token stream, consuming the session.
    ///
    /// On success every token has been consumed and no forward jump is left
    /// unresolved. On failure parsing stops at the first error.
    pub fn run(mut self) -> Result<Artifacts, Failure> {
        match self.parse_program() {
            Ok(()) => Ok(self.into_artifacts()),
            Err(error) => Err(Failure {
                error,
                partial: self.into_artifacts(),
            }),
        }
    }

    fn parse_program(&mut self) -> Result<(), RatError> {
        self.rat25f()?;

        if let Some(extra) = self.peek() {
            return Err(RatError::syntax(
                "Expected end of input after the closing '#'",
                Some(extra),
            ));
        }

        if !self.backpatch.is_empty() {
            return Err(RatError::internal(format!(
                "{} forward jump(s) left unresolved",
                self.backpatch.depth()
            )));
        }

        Ok(())
    }

    fn into_artifacts(self) -> Artifacts {
        Artifacts {
            mode: self.mode,
            trace: self.trace.into_lines(),
            instructions: self.code.into_vec(),
            symbols: self.symbols.into_entries(),
        }
    }
}
