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

use chrono::TimeDelta;

use crate::Error;

/// Parses a filed duration from its hour and minute field pair.
///
/// Both fields empty means no duration was filed. The minute field is not
/// limited to 0..=59; minutes add directly onto the hours, so `1:75` is 135
/// minutes. A mixed-sign pair is corrected to the sign of the dominant
/// field before adding, so a negative duration cannot be shrunk by a
/// positive remainder.
///
/// # Errors
///
/// Returns an error if exactly one of the two fields is empty or if either
/// field is not an integer.
pub fn filed_duration(
    hours_field: &'static str,
    hours: &str,
    minutes_field: &'static str,
    minutes: &str,
) -> Result<Option<TimeDelta>, Error> {
    match (hours.is_empty(), minutes.is_empty()) {
        (true, true) => return Ok(None),
        (true, false) => {
            return Err(Error::InvalidValue {
                field: hours_field,
                value: hours.to_string(),
                expected: "hours to accompany the filed minutes",
            })
        }
        (false, true) => {
            return Err(Error::InvalidValue {
                field: minutes_field,
                value: minutes.to_string(),
                expected: "minutes to accompany the filed hours",
            })
        }
        (false, false) => {}
    }

    let hours: i64 = hours.parse().map_err(|_| Error::InvalidValue {
        field: hours_field,
        value: hours.to_string(),
        expected: "an integer number of hours",
    })?;
    let minutes: i64 = minutes.parse().map_err(|_| Error::InvalidValue {
        field: minutes_field,
        value: minutes.to_string(),
        expected: "an integer number of minutes",
    })?;

    let (hours, minutes) = if hours < 0 && minutes > 0 {
        (hours, -minutes)
    } else if hours > 0 && minutes < 0 {
        (-hours, minutes)
    } else {
        (hours, minutes)
    };

    Ok(Some(TimeDelta::minutes(hours * 60 + minutes)))
}
