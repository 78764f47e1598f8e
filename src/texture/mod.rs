//! Packing of a shape's segments into a 2-row float texture.
//!
//! Row 0 holds segment starts and row 1 segment ends, one column per segment,
//! so a consumer finds segment `i` at `(i, 0)` and `(i, 1)`. The buffer is row
//! major: all starts come before all ends.

use crate::{config_enum, geometry::Point, shape::Shape};

pub use self::settings::TextureSettings;

mod settings;

/// Rows in every segment texture
pub const HEIGHT: u32 = 2;

/// One RGBA float texel
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pixel {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Pixel {
    /// `x` in red, `y` in green, blue cleared, alpha opaque
    pub const fn from_point(p: Point) -> Self {
        Self {
            r: p.x,
            g: p.y,
            b: 0.0,
            a: 1.0,
        }
    }

    pub const fn point(self) -> Point {
        Point::new(self.r, self.g)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentTexture {
    pixels: Vec<Pixel>,
    width: u32,
}

impl SegmentTexture {
    /// One column per segment. A shape without segments packs to a texture
    /// with no columns and no pixels.
    pub fn pack(shape: &Shape) -> Self {
        let n = shape.len();
        let mut pixels = Vec::with_capacity(n * HEIGHT as usize);

        pixels.extend(shape.start_points().map(Pixel::from_point));
        pixels.extend(shape.end_points().map(Pixel::from_point));

        Self {
            pixels,
            width: n as u32,
        }
    }

    /// Number of columns, which is also the segment count
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        HEIGHT
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= HEIGHT {
            return None;
        }

        self.pixels.get((y * self.width + x) as usize).copied()
    }

    pub fn row(&self, y: u32) -> &[Pixel] {
        let width = self.width as usize;

        match y {
            0 => &self.pixels[..width],
            1 => &self.pixels[width..],
            _ => &[],
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * std::mem::size_of::<Pixel>() as u32
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

config_enum!(
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FilterMode {
        /// Sample exactly one segment per texel
        Point = "point",

        /// Blend neighbouring segments, letting the effect morph between them
        Trilinear = "trilinear",
    }
);

impl FilterMode {
    pub const fn from_morphable(morphable: bool) -> Self {
        if morphable {
            Self::Trilinear
        } else {
            Self::Point
        }
    }

    pub const fn is_morphable(self) -> bool {
        matches!(self, Self::Trilinear)
    }
}

config_enum!(
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum WrapMode {
        /// Reflect coordinates outside `[0, 1]`
        Mirror = "mirror",
        Clamp = "clamp",
        Repeat = "repeat",
    }
);
