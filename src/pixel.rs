use derive_new::new;

/// An 8-bit per channel RGBA color
#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Substituted for unmapped palette indices and reads past the end of the stream
    pub const FALLBACK: Pixel = Pixel {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Pixel::new(r, g, b, a)
    }
}
