use std::{collections::BTreeMap, fmt};

use derive_new::new;

use crate::pixel::Pixel;

/// Maps a palette index to its color
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<u32, Pixel>,
}

impl Palette {
    /// Insert a color, replacing any earlier entry for the same index
    pub fn insert(&mut self, index: u32, color: Pixel) {
        self.colors.insert(index, color);
    }

    pub fn get(&self, index: u32) -> Option<Pixel> {
        self.colors.get(&index).copied()
    }

    /// Look up `index`, substituting opaque black if it has no entry
    pub fn resolve(&self, index: u32) -> Pixel {
        self.get(index).unwrap_or(Pixel::FALLBACK)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Pixel)> + '_ {
        self.colors.iter().map(|(&index, &color)| (index, color))
    }
}

impl FromIterator<(u32, Pixel)> for Palette {
    fn from_iter<T: IntoIterator<Item = (u32, Pixel)>>(iter: T) -> Self {
        let mut palette = Palette::default();
        for (index, color) in iter {
            palette.insert(index, color);
        }
        palette
    }
}

/// The declared color format of an asset, e.g. `LV_IMG_CF_INDEXED_1BIT`.
///
/// Carried through for reporting only; decoding always takes the 1-bit indexed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFormat(String);

impl ColorFormat {
    pub const UNKNOWN: &'static str = "unknown";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the tag names a 1 bit per pixel indexed format (`..._INDEXED_1BIT` or `..._I1`)
    pub fn is_indexed_1bit(&self) -> bool {
        self.0.ends_with("INDEXED_1BIT") || self.0.ends_with("_I1")
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bitmap asset as found in the source text, ready for decoding
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub color_format: ColorFormat,
    pub palette: Palette,
    /// Packed pixel bits with the inline palette bytes removed
    pub bits: Vec<u8>,
}

impl Descriptor {
    /// Bytes per row; every row is padded to a whole byte
    pub fn stride(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    pub fn expected_stream_len(&self) -> usize {
        self.stride() * self.height as usize
    }
}
