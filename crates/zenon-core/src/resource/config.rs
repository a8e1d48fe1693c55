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

//! Construction-time settings for a [`ResourceRegistry`](super::ResourceRegistry).

/// The number of distinct slot indices a `u32` index field can address.
pub const INDEX_SPACE: u64 = 1 << 32;

/// What a registry does when releasing a slot would wrap its generation counter to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOverflowPolicy {
    /// Treat the wrap as a broken invariant and panic.
    Panic,
    /// Release the resource but withdraw the slot from reuse for good.
    Retire,
}

impl Default for GenerationOverflowPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Panic
        } else {
            Self::Retire
        }
    }
}

/// Settings for a resource registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Number of slots reserved up front.
    pub initial_capacity: usize,
    /// Upper bound on the number of slots ever allocated. Clamped to [`INDEX_SPACE`].
    pub max_slots: u64,
    /// Behaviour when a slot's generation counter is exhausted.
    pub generation_overflow: GenerationOverflowPolicy,
}

impl RegistryConfig {
    /// The slot limit actually enforced.
    pub fn effective_max_slots(&self) -> u64 {
        self.max_slots.min(INDEX_SPACE)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            max_slots: INDEX_SPACE,
            generation_overflow: GenerationOverflowPolicy::default(),
        }
    }
}
