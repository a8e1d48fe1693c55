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


//! # Zenon IO
//!
//! Turns files on disk into registry-owned resources: shader sources and
//! decoded textures, each reachable through a typed handle.

#![warn(missing_docs)]

mod error;
pub mod loader;
pub mod resource_manager;

pub use error::ResourceError;
pub use loader::{AssetLoader, ShaderSourceLoader, TextureLoader};
pub use resource_manager::ResourceManager;
