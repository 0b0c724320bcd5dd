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

/// A controller rating as carried in the rating field of client records.
///
/// The set of rating IDs is closed; an unknown ID is rejected rather than
/// defaulted.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ControllerRating {
    Observer,
    Student1,
    Student2,
    Student3,
    Controller1,
    Controller2,
    Controller3,
    Instructor1,
    Instructor2,
    Instructor3,
    Supervisor,
    Administrator,
}

impl ControllerRating {
    /// Resolves a rating ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is outside the closed rating table.
    pub fn from_id(id: i32) -> Result<Self, Error> {
        match id {
            1 => Ok(Self::Observer),
            2 => Ok(Self::Student1),
            3 => Ok(Self::Student2),
            4 => Ok(Self::Student3),
            5 => Ok(Self::Controller1),
            6 => Ok(Self::Controller2),
            7 => Ok(Self::Controller3),
            8 => Ok(Self::Instructor1),
            9 => Ok(Self::Instructor2),
            10 => Ok(Self::Instructor3),
            11 => Ok(Self::Supervisor),
            12 => Ok(Self::Administrator),
            id => Err(Error::UnknownVariant {
                field: "rating",
                value: id.to_string(),
                expected: "a rating ID between 1 and 12",
            }),
        }
    }

    /// The numeric ID of this rating in the status file.
    pub fn id(self) -> i32 {
        match self {
            Self::Observer => 1,
            Self::Student1 => 2,
            Self::Student2 => 3,
            Self::Student3 => 4,
            Self::Controller1 => 5,
            Self::Controller2 => 6,
            Self::Controller3 => 7,
            Self::Instructor1 => 8,
            Self::Instructor2 => 9,
            Self::Instructor3 => 10,
            Self::Supervisor => 11,
            Self::Administrator => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_ids() {
        assert_eq!(ControllerRating::from_id(1), Ok(ControllerRating::Observer));
        assert_eq!(
            ControllerRating::from_id(12),
            Ok(ControllerRating::Administrator)
        );
    }

    #[test]
    fn rejects_unknown_ids() {
        assert!(ControllerRating::from_id(0).is_err());
        assert!(ControllerRating::from_id(13).is_err());
        assert!(ControllerRating::from_id(-1).is_err());
    }

    #[test]
    fn ids_round_trip() {
        for id in 1..=12 {
            let rating = ControllerRating::from_id(id).expect("ID should be known");
            assert_eq!(rating.id(), id);
        }
    }
}
