// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use regex::{Captures, Regex};

/// The number of colon terminated fields of a client line.
pub const FIELD_COUNT: usize = 41;

/// The positional field pattern of a client line.
///
/// The grammar is compiled once on construction and is immutable afterwards,
/// so one instance can be shared across threads and parse calls. Every field
/// is any run of characters up to the next colon; the last field is
/// terminated by a trailing colon as well and may be empty.
#[derive(Clone, Debug)]
pub struct LineGrammar {
    pattern: Regex,
}

impl LineGrammar {
    pub fn new() -> Self {
        let mut pattern = String::with_capacity(2 + FIELD_COUNT * 8);
        pattern.push('^');
        for _ in 0..FIELD_COUNT {
            pattern.push_str("([^:]*):");
        }
        pattern.push('$');

        Self {
            // the pattern is a constant and always compiles
            pattern: Regex::new(&pattern).expect("line grammar should compile"),
        }
    }

    /// Matches the line against the grammar.
    ///
    /// Returns `None` if the line does not consist of exactly
    /// [`FIELD_COUNT`] colon terminated fields.
    pub fn fields<'a>(&self, line: &'a str) -> Option<Fields<'a>> {
        self.pattern.captures(line).map(Fields)
    }
}

impl Default for LineGrammar {
    fn default() -> Self {
        Self::new()
    }
}

/// Indexed access to the fields of one matched line.
pub struct Fields<'a>(Captures<'a>);

impl<'a> Fields<'a> {
    /// Returns the field at the 1-based position.
    ///
    /// An empty input field is returned as the empty string.
    #[inline]
    pub fn get(&self, position: usize) -> &'a str {
        self.0.get(position).map_or("", |m| m.as_str())
    }
}
