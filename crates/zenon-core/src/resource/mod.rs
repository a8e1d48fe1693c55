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


//! Generational-handle storage for GPU-backed resources.
//!
//! A [`ResourceRegistry<T>`] owns values of type `T` (shaders, textures, ...)
//! and hands out copyable [`Handle<T>`]s. Every access re-validates the handle,
//! so a handle that outlived its resource yields `None` instead of reading
//! whatever value now occupies the recycled slot.
//!
//! ```
//! use zenon_core::resource::{Handle, ResourceRegistry};
//!
//! let mut registry = ResourceRegistry::new();
//! let a = registry.create_resource("A").unwrap();
//! let b = registry.create_resource("B").unwrap();
//!
//! assert!(registry.release_resource(a));
//! let c = registry.create_resource("C").unwrap();
//!
//! assert_eq!(c, Handle::new(0, 1));
//! assert_eq!(registry.get_resource_ref(b), Some(&"B"));
//! assert_eq!(registry.get_resource_ref(a), None);
//! ```

mod config;
mod error;
mod handle;
mod registry;

pub use config::*;
pub use error::*;
pub use handle::*;
pub use registry::*;
