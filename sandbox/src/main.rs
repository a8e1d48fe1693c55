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

// Zenon Sandbox
// Loads the files given on the command line and walks a registry through
// a create/release/reuse cycle.
//
// Usage: sandbox [FILE]...
//   `name.vert` is loaded together with `name.frag` as a shader,
//   anything else is decoded as a texture.

use std::path::{Path, PathBuf};

use anyhow::Result;
use zenon_core::ResourceRegistry;
use zenon_io::ResourceManager;

fn registry_walkthrough() {
    let mut registry = ResourceRegistry::<String>::new();

    let handles: Vec<_> = ["A", "B"]
        .into_iter()
        .filter_map(|name| registry.create_resource(name.to_string()))
        .collect();
    log::info!("Created {} resources: {handles:?}", handles.len());

    if let Some(&released) = handles.first() {
        registry.release_resource(released);
        log::info!(
            "Released {released}, lookup now gives {:?}",
            registry.get_resource_ref(released)
        );
    }

    if let Some(reused) = registry.create_resource("C".to_string()) {
        log::info!(
            "Created {reused} -> {:?} (slot reused, generation bumped)",
            registry.get_resource_ref(reused)
        );
    }

    registry.for_each_active_resource(|name| log::info!("  active: {name}"));
    log::info!(
        "Slots: {} total, {} in use, {} free",
        registry.total_slots_count(),
        registry.slots_in_use_count(),
        registry.free_slots_count()
    );
}

fn resource_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load_files(manager: &mut ResourceManager, files: &[PathBuf]) {
    for path in files {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("frag") => continue,
            Some("vert") => {
                let frag = path.with_extension("frag");
                // Failures are already logged by the manager.
                let _ = manager.load_shader(&resource_name(path), path, &frag);
            }
            _ => {
                let _ = manager.load_texture(&resource_name(path), path);
            }
        }
    }

    for (handle, texture) in manager.textures().iter() {
        log::info!(
            "Texture {handle}: {}x{} {:?} ({} bytes)",
            texture.width,
            texture.height,
            texture.format,
            texture.pixels.len()
        );
    }
    manager
        .shaders()
        .for_each_active_resource(|shader| log::info!("Shader '{}' ready", shader.label));
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    registry_walkthrough();

    let files: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    let mut manager = ResourceManager::new();
    load_files(&mut manager, &files);
    manager.shutdown();

    Ok(())
}
