//! Colors that can be turned into vectors.

/// A color that can report its red, green, blue and alpha channels with
/// 16 bits of precision, i.e. each channel in the range `[0, 0xffff]`.
pub trait Color {
    fn rgba16(&self) -> [u16; 4];
}

/// A color with 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// A color with 16 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Rgba16 {
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }
}

impl Color for Rgba8 {
    fn rgba16(&self) -> [u16; 4] {
        // Replicating the byte maps 0xff exactly onto 0xffff.
        [
            widen(self.r),
            widen(self.g),
            widen(self.b),
            widen(self.a),
        ]
    }
}

impl Color for Rgba16 {
    fn rgba16(&self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgba8> for Rgba16 {
    fn from(color: Rgba8) -> Self {
        let [r, g, b, a] = color.rgba16();
        Self { r, g, b, a }
    }
}

/// Returns the channels of the color normalized to `[0, 1]`.
pub(crate) fn normalized_channels(color: &impl Color) -> [f64; 4] {
    color
        .rgba16()
        .map(|channel| f64::from(channel) / f64::from(u16::MAX))
}

fn widen(channel: u8) -> u16 {
    (u16::from(channel) << 8) | u16::from(channel)
}
