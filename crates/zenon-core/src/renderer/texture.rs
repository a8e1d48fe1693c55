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


//! CPU-side texture data, ready to be uploaded by a graphics backend.

/// Pixel layout of a decoded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 8-bit red, green and blue.
    Rgb8,
    /// 8-bit red, green, blue and alpha.
    Rgba8,
}

impl TextureFormat {
    /// Number of 8-bit channels per texel.
    pub const fn channels(self) -> u32 {
        match self {
            TextureFormat::Rgb8 => 3,
            TextureFormat::Rgba8 => 4,
        }
    }
}

/// A decoded 2D texture living in system memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuTexture {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Layout of `pixels`.
    pub format: TextureFormat,
    /// Tightly packed rows of texels, first row first.
    pub pixels: Vec<u8>,
}

impl CpuTexture {
    /// Number of channels per texel.
    pub fn channels(&self) -> u32 {
        self.format.channels()
    }

    /// The byte length `pixels` must have for the declared size and format.
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * self.channels() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_byte_len_accounts_for_channels() {
        let rgb = CpuTexture {
            width: 4,
            height: 2,
            format: TextureFormat::Rgb8,
            pixels: vec![0; 24],
        };
        let rgba = CpuTexture {
            format: TextureFormat::Rgba8,
            pixels: vec![0; 32],
            ..rgb.clone()
        };

        assert_eq!(rgb.channels(), 3);
        assert_eq!(rgb.byte_len(), rgb.pixels.len());
        assert_eq!(rgba.channels(), 4);
        assert_eq!(rgba.byte_len(), rgba.pixels.len());
    }
}
