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

// The line break token as decoded from the original single byte encoding
// (ISO-8859-1 bytes 0x5E 0xA7).
const LINE_BREAK: &str = "^\u{a7}";

/// Decodes a controller message field.
///
/// The status file carries ATIS line breaks as the two character token
/// `^§`, which is replaced with a logical newline. Everything else is kept
/// verbatim.
pub fn decode_message(raw: &str) -> String {
    raw.replace(LINE_BREAK, "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_line_break_token() {
        assert_eq!(
            decode_message("Frankfurt Tower^§Expect ILS 25L"),
            "Frankfurt Tower\nExpect ILS 25L"
        );
    }

    #[test]
    fn keeps_plain_text() {
        assert_eq!(decode_message("information Q"), "information Q");
        assert_eq!(decode_message(""), "");
    }

    #[test]
    fn bare_caret_is_kept() {
        assert_eq!(decode_message("a^b"), "a^b");
    }
}
