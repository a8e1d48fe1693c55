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


//! Shader sources as they come off disk.

/// The vertex and fragment sources a shader program is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    /// Human-readable name, used in logs.
    pub label: String,
    /// Vertex stage source code.
    pub vertex: String,
    /// Fragment stage source code.
    pub fragment: String,
}

impl ShaderSource {
    /// Bundles a vertex and a fragment stage under `label`.
    pub fn new(
        label: impl Into<String>,
        vertex: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}
