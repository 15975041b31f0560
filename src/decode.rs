use log::{debug, warn};

use crate::{descriptor::Descriptor, pixel::Pixel};

/// A fully decoded image, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Flatten to `RGBA8` bytes
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_array()).collect()
    }
}

/// Expand the 1 bit per pixel stream of `desc` into colors.
///
/// Bits are read MSB first and every row starts on a byte boundary. Pixels
/// whose byte lies past the end of the stream take the color of index 0, and
/// indices without a palette entry become opaque black. Any declared color
/// format goes through this same path.
pub fn decode(desc: &Descriptor) -> PixelGrid {
    if !desc.color_format.is_indexed_1bit() {
        warn!(
            "Color format {} is decoded as 1-bit indexed",
            desc.color_format
        );
    }
    let expected = desc.expected_stream_len();
    if desc.bits.len() < expected {
        warn!(
            "Bitmap `{}` has {} of {} bytes, padding with index 0",
            desc.name,
            desc.bits.len(),
            expected
        );
    } else if desc.bits.len() > expected {
        debug!(
            "Ignoring {} trailing bytes of `{}`",
            desc.bits.len() - expected,
            desc.name
        );
    }

    let stride = desc.stride();
    let background = desc.palette.resolve(0);
    let mut pixels = Vec::with_capacity(desc.width as usize * desc.height as usize);
    for y in 0..desc.height as usize {
        for x in 0..desc.width as usize {
            let byte_offset = y * stride + x / 8;
            let bit_offset = 7 - (x % 8);
            let color = match desc.bits.get(byte_offset) {
                Some(byte) => desc.palette.resolve(u32::from((byte >> bit_offset) & 1)),
                None => background,
            };
            pixels.push(color);
        }
    }

    PixelGrid {
        width: desc.width,
        height: desc.height,
        pixels,
    }
}
