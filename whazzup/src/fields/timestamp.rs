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

use chrono::NaiveDateTime;

use crate::Error;

/// The token written when no timestamp is available.
pub const DUMMY_TIMESTAMP: &str = "00010101000000";

const FORMAT: &str = "%Y%m%d%H%M%S";

/// Parses a full `YYYYMMDDhhmmss` timestamp field.
///
/// The empty field and the [dummy token] both mean no timestamp.
///
/// # Errors
///
/// Returns an error if the field holds anything else that is not a valid
/// timestamp.
///
/// [dummy token]: DUMMY_TIMESTAMP
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<Option<NaiveDateTime>, Error> {
    if value.is_empty() || value == DUMMY_TIMESTAMP {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(value, FORMAT)
        .map(Some)
        .map_err(|_| Error::InvalidValue {
            field,
            value: value.to_string(),
            expected: "a timestamp formatted as YYYYMMDDhhmmss",
        })
}
