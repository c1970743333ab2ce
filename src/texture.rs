use crate::math;
use crate::rgb::RGB;
use crate::V3;

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to decode texture image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("texture image has a zero dimension")]
    EmptyImage,
}

pub mod textures {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct Constant(pub RGB);

    #[derive(Clone, Debug)]
    pub struct Checker {
        pub frequency: f32,
    }

    /// Decoded RGB8 pixels, sampled through the spherical projection.
    #[derive(Clone, Debug)]
    pub struct ImageMap {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    }

    impl ImageMap {
        /// Takes ownership of already-decoded pixel data, 3 bytes per pixel,
        /// row-major.
        pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, TextureError> {
            if width == 0 || height == 0 {
                return Err(TextureError::EmptyImage);
            }
            assert_eq!(pixels.len(), (width * height * 3) as usize);
            Ok(ImageMap {
                width,
                height,
                pixels,
            })
        }

        pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
            let decoded = image::open(path)?.to_rgb();
            let (width, height) = decoded.dimensions();
            Self::from_raw(width, height, decoded.into_raw())
        }

        pub fn at_uv(&self, u: f32, v: f32) -> RGB {
            let i = ((u * self.width as f32) as u32).min(self.width - 1);
            let j = ((v * self.height as f32) as u32).min(self.height - 1);
            let px = &self.pixels[((j * self.width + i) * 3) as usize..][..3];
            let scale = 1.0 / 255.0;
            RGB::new(
                px[0] as f32 * scale,
                px[1] as f32 * scale,
                px[2] as f32 * scale,
            )
        }
    }
}

#[derive(Clone, Debug)]
pub enum Texture {
    Constant(textures::Constant),
    Checker(textures::Checker),
    ImageMap(textures::ImageMap),
}

impl_wrap_from_many! {Texture, textures, [Constant, Checker, ImageMap]}

impl Texture {
    pub fn constant(color: RGB) -> Self {
        textures::Constant(color).into()
    }

    pub fn checker(frequency: f32) -> Self {
        textures::Checker { frequency }.into()
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        textures::ImageMap::open(path).map(Into::into)
    }

    /// Color at the unit surface direction `n`.
    pub fn sample(&self, n: &V3) -> RGB {
        match self {
            Texture::Constant(t) => t.0,
            Texture::Checker(t) => {
                let p = n * t.frequency;
                if parity(p[0]) * parity(p[1]) * parity(p[2]) == 1 {
                    RGB::all(1.0)
                } else {
                    RGB::all(0.0)
                }
            }
            Texture::ImageMap(t) => {
                let (u, v) = math::spherical_uv(n);
                t.at_uv(u, v)
            }
        }
    }
}

// 1 for odd, -1 for even, truncating toward zero.
fn parity(x: f32) -> i32 {
    if (x as i32) % 2 != 0 {
        1
    } else {
        -1
    }
}
