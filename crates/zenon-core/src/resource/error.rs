// Copyright 2025 eraflo
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

//! Typed failure reasons for registry operations.

use std::fmt;

/// Why a registry operation did not go through.
///
/// The plain registry API reports these as `None`/`false`; the `try_*`
/// variants surface them for callers that want to propagate a reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The handle's index is out of range, its slot is free, or its generation is outdated.
    StaleHandle {
        /// The index carried by the handle.
        index: u32,
        /// The generation carried by the handle.
        generation: u32,
    },
    /// No free slot is left and the slot limit has been reached.
    CapacityExhausted {
        /// The slot limit in force.
        max_slots: u64,
    },
    /// The slot's generation counter would wrap around.
    GenerationOverflow {
        /// The slot that was retired.
        index: u32,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::StaleHandle { index, generation } => {
                write!(f, "Stale handle (index: {index}, generation: {generation})")
            }
            RegistryError::CapacityExhausted { max_slots } => {
                write!(f, "Registry capacity exhausted ({max_slots} slots)")
            }
            RegistryError::GenerationOverflow { index } => {
                write!(f, "Generation counter of slot {index} wrapped around")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
