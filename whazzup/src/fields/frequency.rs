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

use crate::Error;

/// Lowest kHz value of the placeholder band.
///
/// Frequencies from 199.000 up to 199.998 MHz are reserved as inactive
/// placeholders; a station tuned into this band serves nobody.
pub const PLACEHOLDER_KHZ: i32 = 199_000;

/// Parses a served frequency field from MHz into kHz.
///
/// The field holds a floating point MHz value which is rounded to the
/// nearest kHz. An empty field yields the sentinel `-1`.
///
/// # Errors
///
/// Returns an error if the field is neither empty nor a number, or if the
/// rounded result is not a positive frequency.
pub fn parse_khz(field: &'static str, value: &str) -> Result<i32, Error> {
    if value.is_empty() {
        return Ok(-1);
    }

    let mhz: f64 = value.parse().map_err(|_| Error::InvalidValue {
        field,
        value: value.to_string(),
        expected: "a frequency in MHz",
    })?;

    let khz = (mhz * 1000.0).round();
    if khz > 0.0 && khz <= i32::MAX as f64 {
        Ok(khz as i32)
    } else {
        Err(Error::InvalidValue {
            field,
            value: value.to_string(),
            expected: "a positive frequency in MHz",
        })
    }
}

/// Returns `true` if the kHz value means the station actively serves.
///
/// Absent frequencies and the placeholder band do not count as serving.
pub fn serves(khz: i32) -> bool {
    khz > 0 && khz < PLACEHOLDER_KHZ
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_khz() {
        assert_eq!(parse_khz("frequency", "118.500"), Ok(118_500));
        assert_eq!(parse_khz("frequency", "121.7251"), Ok(121_725));
        assert_eq!(parse_khz("frequency", "1.21725e2"), Ok(121_725));
    }

    #[test]
    fn absent_is_sentinel() {
        assert_eq!(parse_khz("frequency", ""), Ok(-1));
    }

    #[test]
    fn rejects_non_positive_results() {
        assert!(parse_khz("frequency", "0").is_err());
        assert!(parse_khz("frequency", "-1").is_err());
        assert!(parse_khz("frequency", "1e-10").is_err());
        assert!(parse_khz("frequency", "active").is_err());
    }

    #[test]
    fn placeholder_band_does_not_serve() {
        assert!(serves(118_500));
        assert!(serves(198_999));
        assert!(!serves(PLACEHOLDER_KHZ));
        assert!(!serves(199_998));
        assert!(!serves(-1));
    }
}
