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

//! Generation-checked slot storage for GPU-backed resources.

use super::{GenerationOverflowPolicy, Handle, RegistryConfig, RegistryError};

/// One storage slot. `data` is `Some` only while the slot is active.
#[derive(Debug)]
struct Entry<T> {
    data: Option<T>,
    generation: u32,
}

impl<T> Entry<T> {
    #[inline]
    fn is_active(&self) -> bool {
        self.data.is_some()
    }
}

/// Owns values of type `T` and hands out [`Handle`]s to them.
///
/// The `ResourceRegistry` maintains a dense, append-only list of slots. Releasing
/// a resource drops its value, bumps the slot's generation and pushes the index
/// onto a free list; the most recently freed slot is reused first. A handle is
/// valid only while its index is in range, the slot is active and the
/// generations match, so holders of old handles never observe a newer value.
///
/// The registry is single-threaded and does no internal locking. Wrap it in a
/// mutex or confine it to one thread if it must be shared.
#[derive(Debug)]
pub struct ResourceRegistry<T> {
    entries: Vec<Entry<T>>,
    /// Indices available for reuse, used as a stack.
    free_indices: Vec<u32>,
    active_count: usize,
    retired_count: usize,
    config: RegistryConfig,
}

impl<T> Default for ResourceRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceRegistry<T> {
    /// Creates an empty registry with the default [`RegistryConfig`].
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given settings.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: Vec::with_capacity(config.initial_capacity),
            free_indices: Vec::with_capacity(config.initial_capacity),
            active_count: 0,
            retired_count: 0,
            config,
        }
    }

    /// The settings this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Makes sure at least `capacity` slots can exist without reallocating.
    pub fn init_storage(&mut self, capacity: usize) {
        self.entries
            .reserve(capacity.saturating_sub(self.entries.len()));
        self.free_indices
            .reserve(capacity.saturating_sub(self.free_indices.len()));
    }

    /// Stores `value` and returns a handle to it.
    ///
    /// Returns `None` only when no free slot is left and the slot limit is reached.
    pub fn create_resource(&mut self, value: T) -> Option<Handle<T>> {
        self.emplace_resource(move || value)
    }

    /// Like [`create_resource`](Self::create_resource), with a typed error on failure.
    pub fn try_create_resource(&mut self, value: T) -> Result<Handle<T>, RegistryError> {
        let max_slots = self.config.effective_max_slots();
        self.create_resource(value)
            .ok_or(RegistryError::CapacityExhausted { max_slots })
    }

    /// Builds the value with `T::from(args)` directly into a slot.
    pub fn emplace_from<A>(&mut self, args: A) -> Option<Handle<T>>
    where
        T: From<A>,
    {
        self.emplace_resource(move || T::from(args))
    }

    /// Secures a slot, then runs `make` to construct the value in it.
    ///
    /// `make` is not called when the registry is full.
    pub fn emplace_resource<F>(&mut self, make: F) -> Option<Handle<T>>
    where
        F: FnOnce() -> T,
    {
        let handle = if let Some(&index) = self.free_indices.last() {
            // Construct before popping so a panicking `make` leaves the slot on the free list.
            let value = make();
            self.free_indices.pop();
            let entry = &mut self.entries[index as usize];
            debug_assert!(!entry.is_active(), "free list points at an active slot");
            entry.data = Some(value);
            log::trace!(
                "Reused resource slot {index} (generation {})",
                entry.generation
            );
            Handle::new(index, entry.generation)
        } else {
            let max_slots = self.config.effective_max_slots();
            if self.entries.len() as u64 >= max_slots {
                log::warn!("Resource registry is full ({max_slots} slots), cannot create resource");
                return None;
            }

            let index = self.entries.len() as u32;
            self.entries.push(Entry {
                data: Some(make()),
                generation: 0,
            });
            log::trace!("Created resource slot {index}");
            Handle::new(index, 0)
        };

        self.active_count += 1;
        Some(handle)
    }

    /// Drops the resource behind `handle` and frees its slot.
    ///
    /// Returns `false` if the handle was already stale. Releasing twice is harmless.
    pub fn release_resource(&mut self, handle: Handle<T>) -> bool {
        self.take_resource(handle).is_some()
    }

    /// Like [`take_resource`](Self::take_resource), with a typed error on a stale handle.
    pub fn try_release_resource(&mut self, handle: Handle<T>) -> Result<T, RegistryError> {
        self.take_resource(handle)
            .ok_or(RegistryError::StaleHandle {
                index: handle.index(),
                generation: handle.generation(),
            })
    }

    /// Releases the resource behind `handle` and gives the value back to the caller.
    ///
    /// # Panics
    /// When the slot's generation counter is exhausted and the registry uses
    /// [`GenerationOverflowPolicy::Panic`].
    pub fn take_resource(&mut self, handle: Handle<T>) -> Option<T> {
        let index = self.validate(handle)?;
        let entry = &mut self.entries[index];

        let next_generation = entry.generation.checked_add(1);
        if next_generation.is_none()
            && self.config.generation_overflow == GenerationOverflowPolicy::Panic
        {
            panic!(
                "{}",
                RegistryError::GenerationOverflow {
                    index: handle.index()
                }
            );
        }

        let value = entry.data.take();
        self.active_count -= 1;

        match next_generation {
            Some(generation) => {
                entry.generation = generation;
                self.free_indices.push(handle.index());
                log::trace!("Released resource slot {index} (next generation {generation})");
            }
            None => {
                // The slot keeps generation u32::MAX and stays inactive, so no
                // handle can ever validate against it again.
                self.retired_count += 1;
                log::error!(
                    "{}, slot retired",
                    RegistryError::GenerationOverflow {
                        index: handle.index()
                    }
                );
            }
        }

        value
    }

    /// Returns `true` if `handle` refers to a live resource.
    pub fn is_valid(&self, handle: Handle<T>) -> bool {
        self.validate(handle).is_some()
    }

    /// Borrows the resource behind `handle`, if it is still alive.
    pub fn get_resource_ref(&self, handle: Handle<T>) -> Option<&T> {
        let index = self.validate(handle)?;
        self.entries[index].data.as_ref()
    }

    /// Mutably borrows the resource behind `handle`, if it is still alive.
    pub fn get_resource_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        let index = self.validate(handle)?;
        self.entries[index].data.as_mut()
    }

    /// Runs `modify` on the resource behind `handle`.
    ///
    /// Returns `false`, without calling `modify`, if the handle is stale.
    pub fn modify_resource<F>(&mut self, handle: Handle<T>, modify: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.get_resource_mut(handle) {
            Some(value) => {
                modify(value);
                true
            }
            None => false,
        }
    }

    /// Calls `f` on every active resource, in slot order.
    pub fn for_each_active_resource<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.entries
            .iter()
            .filter_map(|entry| entry.data.as_ref())
            .for_each(|value| f(value));
    }

    /// Calls `f` on every active resource, in slot order, with mutable access.
    pub fn for_each_active_resource_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        self.entries
            .iter_mut()
            .filter_map(|entry| entry.data.as_mut())
            .for_each(|value| f(value));
    }

    /// Iterates over active resources together with their current handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> + '_ {
        self.entries.iter().enumerate().filter_map(|(index, entry)| {
            entry
                .data
                .as_ref()
                .map(|value| (Handle::new(index as u32, entry.generation), value))
        })
    }

    /// Number of slots ever allocated, active or not.
    pub fn total_slots_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of slots waiting on the free list.
    pub fn free_slots_count(&self) -> usize {
        self.free_indices.len()
    }

    /// Number of slots currently holding a resource.
    pub fn slots_in_use_count(&self) -> usize {
        self.active_count
    }

    /// Number of slots withdrawn from reuse after their generation ran out.
    pub fn retired_slots_count(&self) -> usize {
        self.retired_count
    }

    fn validate(&self, handle: Handle<T>) -> Option<usize> {
        let index = handle.index() as usize;
        let entry = self.entries.get(index)?;
        (entry.is_active() && entry.generation == handle.generation()).then_some(index)
    }

    #[cfg(test)]
    fn scan_active_slots(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_active()).count()
    }

    #[cfg(test)]
    fn force_generation(&mut self, index: u32, generation: u32) {
        self.entries[index as usize].generation = generation;
    }
}
