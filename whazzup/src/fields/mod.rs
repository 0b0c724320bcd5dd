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

//! Typed field values of the status file.

mod duration;
mod facility;
mod frequency;
mod message;
mod rating;
mod role;
mod timestamp;

pub use duration::filed_duration;
pub use facility::FacilityType;
pub use frequency::{parse_khz, serves, PLACEHOLDER_KHZ};
pub use message::decode_message;
pub use rating::ControllerRating;
pub use role::ClientRole;
pub use timestamp::{parse_timestamp, DUMMY_TIMESTAMP};

use crate::Error;

/// Parses an optional integer field.
///
/// An empty field yields the default; anything else must be an integer.
pub(crate) fn int_or(field: &'static str, value: &str, default: i32) -> Result<i32, Error> {
    if value.is_empty() {
        Ok(default)
    } else {
        value.parse().map_err(|_| Error::InvalidValue {
            field,
            value: value.to_string(),
            expected: "an integer",
        })
    }
}

/// Parses an optional non-negative integer field.
pub(crate) fn non_negative_int_or(
    field: &'static str,
    value: &str,
    default: i32,
) -> Result<i32, Error> {
    let parsed = int_or(field, value, default)?;

    if parsed < 0 && parsed != default {
        Err(Error::InvalidValue {
            field,
            value: value.to_string(),
            expected: "a non-negative integer",
        })
    } else {
        Ok(parsed)
    }
}

/// Parses an optional floating point field with NaN as the absent value.
pub(crate) fn float_or_nan(field: &'static str, value: &str) -> Result<f64, Error> {
    if value.is_empty() {
        Ok(f64::NAN)
    } else {
        value.parse().map_err(|_| Error::InvalidValue {
            field,
            value: value.to_string(),
            expected: "a floating point number",
        })
    }
}

/// Returns `true` if the field holds a number other than zero.
///
/// Malformed values count as absent; this is only used to guess the role of
/// ambiguous records, never to validate them.
pub(crate) fn present_and_non_zero(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().map_or(false, |v| v != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_int_defaults_when_empty() {
        assert_eq!(int_or("x", "", -1), Ok(-1));
        assert_eq!(int_or("x", "42", -1), Ok(42));
        assert!(int_or("x", "forty", -1).is_err());
    }

    #[test]
    fn non_negative_int_rejects_negative_values() {
        assert_eq!(non_negative_int_or("x", "", -1), Ok(-1));
        assert_eq!(non_negative_int_or("x", "0", -1), Ok(0));
        assert!(non_negative_int_or("x", "-2", -1).is_err());
    }

    #[test]
    fn absent_float_is_nan() {
        assert!(float_or_nan("x", "").unwrap().is_nan());
        assert_eq!(float_or_nan("x", "-73.7786"), Ok(-73.7786));
        assert!(float_or_nan("x", "n/a").is_err());
    }

    #[test]
    fn non_zero_presence() {
        assert!(present_and_non_zero("180"));
        assert!(present_and_non_zero("29.92"));
        assert!(!present_and_non_zero(""));
        assert!(!present_and_non_zero("0"));
        assert!(!present_and_non_zero("0.0"));
        assert!(!present_and_non_zero("ghost"));
    }
}
