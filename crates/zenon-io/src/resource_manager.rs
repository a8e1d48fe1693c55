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

//! Name-keyed loading of shaders and textures into owned registries.

use crate::loader::{AssetLoader, ShaderSourceLoader, TextureLoader};
use crate::ResourceError;
use std::collections::HashMap;
use std::path::Path;
use zenon_core::renderer::{CpuTexture, ShaderSource};
use zenon_core::resource::{Handle, RegistryConfig, ResourceRegistry};

/// Loads resources from disk and keeps them in per-type registries.
///
/// Each resource is registered under a unique name. Callers keep the returned
/// [`Handle`] across frames and resolve it with [`shader`](Self::shader) or
/// [`texture`](Self::texture) when they need the data; a handle whose resource
/// was unloaded resolves to `None`.
///
/// The manager is a plain value: whoever needs it (a renderer, an application
/// context) owns it and passes it by reference.
#[derive(Debug, Default)]
pub struct ResourceManager {
    shaders: ResourceRegistry<ShaderSource>,
    textures: ResourceRegistry<CpuTexture>,
    shader_names: HashMap<String, Handle<ShaderSource>>,
    texture_names: HashMap<String, Handle<CpuTexture>>,
    shader_loader: ShaderSourceLoader,
    texture_loader: TextureLoader,
}

impl ResourceManager {
    /// Creates an empty manager with default registry settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager whose registries both use `config`.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            shaders: ResourceRegistry::with_config(config.clone()),
            textures: ResourceRegistry::with_config(config),
            ..Self::default()
        }
    }

    /// Replaces the loader used by [`load_texture`](Self::load_texture).
    pub fn with_texture_loader(mut self, loader: TextureLoader) -> Self {
        self.texture_loader = loader;
        self
    }

    /// Reads a vertex and a fragment stage and registers them under `name`.
    pub fn load_shader(
        &mut self,
        name: &str,
        vert_path: impl AsRef<Path>,
        frag_path: impl AsRef<Path>,
    ) -> Result<Handle<ShaderSource>, ResourceError> {
        self.try_load_shader(name, vert_path.as_ref(), frag_path.as_ref())
            .inspect(|handle| log::info!("Loaded shader '{name}' as {handle}"))
            .inspect_err(|e| log::error!("Failed to load shader '{name}': {e}"))
    }

    fn try_load_shader(
        &mut self,
        name: &str,
        vert_path: &Path,
        frag_path: &Path,
    ) -> Result<Handle<ShaderSource>, ResourceError> {
        ensure_exists(vert_path)?;
        ensure_exists(frag_path)?;
        ensure_unique(&self.shader_names, name)?;

        let vertex = self.shader_loader.load(&read_file(vert_path)?)?;
        let fragment = self.shader_loader.load(&read_file(frag_path)?)?;

        register(
            &mut self.shaders,
            &mut self.shader_names,
            name,
            ShaderSource::new(name, vertex, fragment),
        )
    }

    /// Decodes the image at `path` and registers it under `name`.
    pub fn load_texture(
        &mut self,
        name: &str,
        path: impl AsRef<Path>,
    ) -> Result<Handle<CpuTexture>, ResourceError> {
        self.try_load_texture(name, path.as_ref())
            .inspect(|handle| log::info!("Loaded texture '{name}' as {handle}"))
            .inspect_err(|e| log::error!("Failed to load texture '{name}': {e}"))
    }

    fn try_load_texture(
        &mut self,
        name: &str,
        path: &Path,
    ) -> Result<Handle<CpuTexture>, ResourceError> {
        ensure_exists(path)?;
        ensure_unique(&self.texture_names, name)?;

        let texture = self.texture_loader.load(&read_file(path)?)?;
        log::debug!(
            "Decoded '{}': {}x{} {:?}",
            path.display(),
            texture.width,
            texture.height,
            texture.format
        );

        register(&mut self.textures, &mut self.texture_names, name, texture)
    }

    /// The handle registered under `name`, if any.
    pub fn shader_handle(&self, name: &str) -> Option<Handle<ShaderSource>> {
        self.shader_names.get(name).copied()
    }

    /// The handle registered under `name`, if any.
    pub fn texture_handle(&self, name: &str) -> Option<Handle<CpuTexture>> {
        self.texture_names.get(name).copied()
    }

    /// Resolves a shader handle.
    pub fn shader(&self, handle: Handle<ShaderSource>) -> Option<&ShaderSource> {
        self.shaders.get_resource_ref(handle)
    }

    /// Resolves a texture handle.
    pub fn texture(&self, handle: Handle<CpuTexture>) -> Option<&CpuTexture> {
        self.textures.get_resource_ref(handle)
    }

    /// Releases the shader registered under `name` and forgets the name.
    pub fn unload_shader(&mut self, name: &str) -> bool {
        unregister(&mut self.shaders, &mut self.shader_names, name)
    }

    /// Releases the texture registered under `name` and forgets the name.
    pub fn unload_texture(&mut self, name: &str) -> bool {
        unregister(&mut self.textures, &mut self.texture_names, name)
    }

    /// Read access to the shader registry.
    pub fn shaders(&self) -> &ResourceRegistry<ShaderSource> {
        &self.shaders
    }

    /// Read access to the texture registry.
    pub fn textures(&self) -> &ResourceRegistry<CpuTexture> {
        &self.textures
    }

    /// Releases every resource. All previously issued handles become stale.
    pub fn shutdown(&mut self) {
        let shaders = self.shader_names.len();
        let textures = self.texture_names.len();

        for (_, handle) in self.shader_names.drain() {
            self.shaders.release_resource(handle);
        }
        for (_, handle) in self.texture_names.drain() {
            self.textures.release_resource(handle);
        }

        log::info!("Resource manager shut down ({shaders} shaders, {textures} textures released)");
    }
}

fn ensure_exists(path: &Path) -> Result<(), ResourceError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ResourceError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

fn ensure_unique<T>(names: &HashMap<String, Handle<T>>, name: &str) -> Result<(), ResourceError> {
    if names.contains_key(name) {
        Err(ResourceError::AlreadyLoaded(name.to_string()))
    } else {
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, ResourceError> {
    std::fs::read(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn register<T>(
    registry: &mut ResourceRegistry<T>,
    names: &mut HashMap<String, Handle<T>>,
    name: &str,
    value: T,
) -> Result<Handle<T>, ResourceError> {
    let handle = registry.try_create_resource(value)?;
    names.insert(name.to_string(), handle);
    Ok(handle)
}

fn unregister<T>(
    registry: &mut ResourceRegistry<T>,
    names: &mut HashMap<String, Handle<T>>,
    name: &str,
) -> bool {
    match names.remove(name) {
        Some(handle) => registry.release_resource(handle),
        None => {
            log::warn!("Cannot unload '{name}': no such resource");
            false
        }
    }
}
