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

/// Determines whether a given identifier is a **reserved keyword** in Rat25F.
///
/// Used by the lexer during tokenization to tell user-defined identifiers
/// apart from language words.
///
/// # Rat25F Examples
/// ```text
/// while     -> keyword
/// fi        -> keyword
/// total     -> identifier
/// x$1       -> identifier
/// ```
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "function" |
        "if" |
        "fi" |
        "else" |
        "return" |
        "put" |
        "get" |
        "while" |
        "integer" |
        "boolean" |
        "real" |
        "true" |
        "false"
    )
}

/// Complete Rat25F operator set, one- and two-character forms.
///
/// Note that "greater or equal" is spelled `=>` in Rat25F.
pub fn is_operator(lexeme: &str) -> bool {
    matches!(
        lexeme,
        "==" | "!=" | "<=" | "=>" | "=" | ">" | "<" | "+" | "-" | "*" | "/"
    )
}

/// Characters that may begin an operator. `!` only appears as part of `!=`.
pub fn is_operator_start(ch: char) -> bool {
    matches!(ch, '=' | '!' | '<' | '>' | '+' | '-' | '*' | '/')
}

pub fn is_separator(ch: char) -> bool {
    matches!(ch, '#' | '(' | ')' | '{' | '}' | ',' | ';')
}
