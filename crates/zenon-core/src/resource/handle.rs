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

//! Opaque, generation-checked references into a [`ResourceRegistry`](super::ResourceRegistry).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

const GENERATION_SHIFT: u32 = 32;
const INDEX_MASK: u64 = 0xFFFF_FFFF;

/// A typed handle to a resource slot.
///
/// It combines a slot index with a generation count to solve the "ABA problem".
/// When a resource is released, its slot can be reused for a new resource, but
/// the generation is incremented first. Old handles pointing to the recycled
/// slot then fail validation instead of silently reading the new value.
///
/// The handle packs both fields in a single `u64` (generation in the high 32
/// bits, index in the low 32 bits). It carries no ownership and is only
/// meaningful relative to the registry that issued it.
pub struct Handle<T> {
    value: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    /// Builds a handle from its two components.
    #[inline]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self {
            value: ((generation as u64) << GENERATION_SHIFT) | index as u64,
            _marker: PhantomData,
        }
    }

    /// Rebuilds a handle from a value previously returned by [`to_bits`](Self::to_bits).
    #[inline]
    pub const fn from_bits(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// The raw packed value.
    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.value
    }

    /// The slot index this handle points to.
    #[inline]
    pub const fn index(self) -> u32 {
        (self.value & INDEX_MASK) as u32
    }

    /// The generation of the slot at the time this handle was issued.
    #[inline]
    pub const fn generation(self) -> u32 {
        (self.value >> GENERATION_SHIFT) as u32
    }
}

// Manual impls so that `Handle<T>` is `Copy`/`Eq`/... regardless of `T`.

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("index", &self.index())
            .field("generation", &self.generation())
            .finish()
    }
}

impl<T> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}:{})", self.index(), self.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Not Clone, not Eq: handles must not care.
    struct OpaqueResource;

    #[test]
    fn test_fields_are_packed_into_a_single_u64() {
        let handle = Handle::<OpaqueResource>::new(7, 3);

        assert_eq!(handle.index(), 7);
        assert_eq!(handle.generation(), 3);
        assert_eq!(handle.to_bits(), (3u64 << 32) | 7);
    }

    #[test]
    fn test_extreme_values_do_not_bleed_into_each_other() {
        let handle = Handle::<OpaqueResource>::new(u32::MAX, 0);
        assert_eq!(handle.index(), u32::MAX);
        assert_eq!(handle.generation(), 0);

        let handle = Handle::<OpaqueResource>::new(0, u32::MAX);
        assert_eq!(handle.index(), 0);
        assert_eq!(handle.generation(), u32::MAX);
    }

    #[test]
    fn test_from_bits_restores_the_same_handle() {
        let handle = Handle::<OpaqueResource>::new(42, 9);
        assert_eq!(Handle::<OpaqueResource>::from_bits(handle.to_bits()), handle);
    }

    #[test]
    fn test_handles_compare_by_raw_value() {
        let a = Handle::<OpaqueResource>::new(1, 0);
        let b = a;
        let c = Handle::<OpaqueResource>::new(1, 1);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_and_debug() {
        let handle = Handle::<OpaqueResource>::new(4, 2);
        assert_eq!(handle.to_string(), "Handle(4:2)");
        assert_eq!(format!("{handle:?}"), "Handle { index: 4, generation: 2 }");
    }
}
