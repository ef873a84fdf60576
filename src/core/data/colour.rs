/// An opaque 8-bit RGB colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const MAGENTA: Self = Self::new(255, 0, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts hue/saturation/brightness (all in `0.0..=1.0`) to RGB.
    ///
    /// The hue wraps, so `1.0` lands back on red. Channels are rounded the
    /// way AWT rounds them (`v * 255 + 0.5`, truncated) so the output matches
    /// a `Color.getHSBColor` palette byte for byte.
    #[must_use]
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let channel = |v: f32| (v * 255.0 + 0.5) as u8;

        if saturation == 0.0 {
            let v = channel(brightness);
            return Self::new(v, v, v);
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match h as i32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            5 => (brightness, p, q),
            _ => (0.0, 0.0, 0.0),
        };

        Self::new(channel(r), channel(g), channel(b))
    }
}
