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

/// The facility an ATC station serves.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum FacilityType {
    Observer,
    FlightServiceStation,
    ClearanceDelivery,
    Ground,
    Tower,
    Approach,
    Center,
}

impl FacilityType {
    /// Resolves a facility type ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is outside the closed facility table.
    pub fn from_id(id: i32) -> Result<Self, Error> {
        match id {
            0 => Ok(Self::Observer),
            1 => Ok(Self::FlightServiceStation),
            2 => Ok(Self::ClearanceDelivery),
            3 => Ok(Self::Ground),
            4 => Ok(Self::Tower),
            5 => Ok(Self::Approach),
            6 => Ok(Self::Center),
            id => Err(Error::UnknownVariant {
                field: "facilitytype",
                value: id.to_string(),
                expected: "a facility type ID between 0 and 6",
            }),
        }
    }

    /// The numeric ID of this facility type in the status file.
    pub fn id(self) -> i32 {
        match self {
            Self::Observer => 0,
            Self::FlightServiceStation => 1,
            Self::ClearanceDelivery => 2,
            Self::Ground => 3,
            Self::Tower => 4,
            Self::Approach => 5,
            Self::Center => 6,
        }
    }
}
