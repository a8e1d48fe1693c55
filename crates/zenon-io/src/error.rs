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


//! Errors raised while loading resources from disk.

use std::path::PathBuf;
use thiserror::Error;
use zenon_core::resource::RegistryError;

/// Everything that can go wrong between a path on disk and a registry handle.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested file does not exist.
    #[error("File {} does not exist", .path.display())]
    FileNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The image decoder rejected the file contents.
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// A shader stage is not valid UTF-8 text.
    #[error("Shader source is not valid UTF-8: {0}")]
    InvalidShaderSource(#[from] std::string::FromUtf8Error),

    /// A resource is already registered under this name.
    #[error("Resource ({0}) already exists in the registry")]
    AlreadyLoaded(String),

    /// The registry refused the resource.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
