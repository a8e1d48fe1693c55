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

//! Decoders turning raw file bytes into resource values.

use crate::ResourceError;
use image::DynamicImage;
use zenon_core::renderer::{CpuTexture, TextureFormat};

/// A trait for types that can load a specific kind of resource from a byte slice.
///
/// Implementors do the CPU-side work of parsing and decoding raw file data;
/// they know nothing about paths or registries.
pub trait AssetLoader<A> {
    /// Parses `bytes` into an instance of `A`.
    fn load(&self, bytes: &[u8]) -> Result<A, ResourceError>;
}

/// Decodes image files (PNG, JPEG, ...) with the `image` crate.
#[derive(Debug, Clone, Copy)]
pub struct TextureLoader {
    /// Flip rows so the first row of `pixels` is the bottom of the image,
    /// which is what OpenGL-style texture coordinates expect.
    pub flip_vertically: bool,
}

impl Default for TextureLoader {
    fn default() -> Self {
        Self {
            flip_vertically: true,
        }
    }
}

impl AssetLoader<CpuTexture> for TextureLoader {
    fn load(&self, bytes: &[u8]) -> Result<CpuTexture, ResourceError> {
        let mut img = image::load_from_memory(bytes)?;
        if self.flip_vertically {
            img = img.flipv();
        }

        let (width, height) = (img.width(), img.height());
        let (format, pixels) = match img {
            DynamicImage::ImageRgb8(buffer) => (TextureFormat::Rgb8, buffer.into_raw()),
            DynamicImage::ImageRgba8(buffer) => (TextureFormat::Rgba8, buffer.into_raw()),
            // Wider or narrower layouts are converted to 8 bits per channel.
            other if other.color().channel_count() == 3 => {
                (TextureFormat::Rgb8, other.to_rgb8().into_raw())
            }
            other => (TextureFormat::Rgba8, other.to_rgba8().into_raw()),
        };

        Ok(CpuTexture {
            width,
            height,
            format,
            pixels,
        })
    }
}

/// Reads a single shader stage as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShaderSourceLoader;

impl AssetLoader<String> for ShaderSourceLoader {
    fn load(&self, bytes: &[u8]) -> Result<String, ResourceError> {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(img: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    /// A 1x2 image: red on top, blue at the bottom.
    fn two_row_rgba() -> Vec<u8> {
        let mut img = RgbaImage::new(1, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        encode_png(DynamicImage::ImageRgba8(img))
    }

    #[test]
    fn test_rgba_png_keeps_alpha() {
        let loader = TextureLoader {
            flip_vertically: false,
        };
        let texture = loader.load(&two_row_rgba()).unwrap();

        assert_eq!(texture.width, 1);
        assert_eq!(texture.height, 2);
        assert_eq!(texture.format, TextureFormat::Rgba8);
        assert_eq!(texture.pixels, vec![255, 0, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_flip_puts_bottom_row_first() {
        let texture = TextureLoader::default().load(&two_row_rgba()).unwrap();
        assert_eq!(&texture.pixels[..4], &[0, 0, 255, 255]);
        assert_eq!(&texture.pixels[4..], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_rgb_png_stays_three_channels() {
        let img = RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]));
        let texture = TextureLoader::default()
            .load(&encode_png(DynamicImage::ImageRgb8(img)))
            .unwrap();

        assert_eq!(texture.format, TextureFormat::Rgb8);
        assert_eq!(texture.pixels.len(), texture.byte_len());
    }

    #[test]
    fn test_grayscale_is_expanded_to_rgba() {
        let img = image::GrayImage::from_pixel(2, 2, image::Luma([128]));
        let texture = TextureLoader::default()
            .load(&encode_png(DynamicImage::ImageLuma8(img)))
            .unwrap();

        assert_eq!(texture.format, TextureFormat::Rgba8);
        assert_eq!(&texture.pixels[..4], &[128, 128, 128, 255]);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = TextureLoader::default().load(b"definitely not an image");
        assert!(matches!(result, Err(ResourceError::ImageDecode(_))));
    }

    #[test]
    fn test_shader_source_must_be_utf8() {
        let loader = ShaderSourceLoader;
        assert_eq!(loader.load(b"void main() {}").unwrap(), "void main() {}");
        assert!(matches!(
            loader.load(&[0xff, 0xfe, 0xfd]),
            Err(ResourceError::InvalidShaderSource(_))
        ));
    }
}
