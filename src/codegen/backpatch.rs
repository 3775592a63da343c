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

use crate::error::RatError;

/// LIFO stack of instruction addresses whose jump target is not yet known.
///
/// Nested `if`/`while` constructs interleave pending patches, so the
/// pending set is kept in an explicit container rather than on the call
/// stack.
#[derive(Debug, Clone, Default)]
pub struct BackpatchStack {
    pending: Vec<usize>,
}

impl BackpatchStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, address: usize) {
        self.pending.push(address);
    }

    /// Pops the most recent pending address. Underflow means the translator
    /// popped more than it pushed.
    pub fn pop(&mut self) -> Result<usize, RatError> {
        self.pending
            .pop()
            .ok_or_else(|| RatError::internal("Backpatch stack underflow"))
    }

    pub fn depth(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
