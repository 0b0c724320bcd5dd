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

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

// Anything after the colon of a header line is ignored.
static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!([^:]+):").expect("section header pattern should compile"));

/// A named group of raw lines.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RawSection {
    pub name: String,
    pub lines: Vec<String>,
}

/// The sections of a status file, split but not yet parsed.
///
/// Splitting never fails; malformed content lines are kept verbatim and left
/// to the per record parsers.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Sections {
    sections: Vec<RawSection>,
    // index into sections, keyed by the upper cased name
    index: HashMap<String, usize>,
}

impl Sections {
    /// Splits raw text into sections.
    ///
    /// Comment lines (`;` prefix) and blank lines are dropped anywhere and
    /// never alter the section state. A `!NAME:` header starts a new,
    /// initially empty section; a repeated header resets that section. Lines
    /// before the first header are discarded.
    pub fn split(text: &str) -> Self {
        let mut sections = Self::default();
        let mut current: Option<usize> = None;

        for line in text.lines() {
            if line.starts_with(';') || line.trim().is_empty() {
                continue;
            }

            if let Some(header) = SECTION_HEADER.captures(line) {
                current = Some(sections.start(&header[1]));
            } else if let Some(i) = current {
                sections.sections[i].lines.push(line.to_string());
            }
        }

        sections
    }

    /// Returns the section, matching the name case-insensitively.
    pub fn get(&self, name: &str) -> Option<&RawSection> {
        self.index
            .get(&name.to_uppercase())
            .map(|&i| &self.sections[i])
    }

    /// Returns the section's lines, or no lines if the section is missing.
    pub fn lines(&self, name: &str) -> &[String] {
        self.get(name).map_or(&[], |section| &section.lines)
    }

    /// Sections in the order their headers appeared.
    pub fn iter(&self) -> impl Iterator<Item = &RawSection> {
        self.sections.iter()
    }

    fn start(&mut self, name: &str) -> usize {
        match self.index.get(&name.to_uppercase()) {
            Some(&i) => {
                self.sections[i].lines.clear();
                i
            }
            None => {
                self.sections.push(RawSection {
                    name: name.to_string(),
                    lines: Vec::new(),
                });

                let i = self.sections.len() - 1;
                self.index.insert(name.to_uppercase(), i);
                i
            }
        }
    }
}
