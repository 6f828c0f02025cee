//! RGB and HLS colour representations
//!
//! HLS follows the double-hexcone model through `palette`'s `Hsl`, with hue
//! stored as a fraction in `[0, 1)` and lightness and saturation in `[0, 1]`.
//! Converting back to 8-bit channels truncates rather than rounds, so repeated
//! round trips drift slightly darker.

use std::fmt;

use palette::{IntoColor, Srgb};

/// 8-bit sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

/// Colour in hue / lightness / saturation space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    /// Hue as a fraction of a full turn
    pub hue: f64,
    /// Lightness
    pub lightness: f64,
    /// Saturation
    pub saturation: f64,
}

type SrgbHsl = palette::Hsl<palette::encoding::Srgb, f64>;

impl Rgb {
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Light gray used as the default secondary colour
    pub const LIGHT_GRAY: Self = Self::new(204, 204, 204);
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a colour from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse `#RRGGBB` or the shorthand `#RGB`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            6 => {
                let channel = |at: usize| {
                    digits
                        .get(at..at + 2)
                        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                };
                Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |at: usize| {
                    digits
                        .get(at..=at)
                        .and_then(|nibble| u8::from_str_radix(nibble, 16).ok())
                        .map(|v| v * 17)
                };
                Some(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => None,
        }
    }

    /// Uppercase `#RRGGBB` form
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Add `delta` to every channel, saturating at 0 and 255
    #[must_use]
    pub fn shift(self, delta: i16) -> Self {
        let apply = |c: u8| {
            let shifted = i16::from(c).saturating_add(delta).clamp(0, 255);
            u8::try_from(shifted).unwrap_or(u8::MAX)
        };
        Self::new(apply(self.r), apply(self.g), apply(self.b))
    }

    /// Convert to HLS
    pub fn to_hls(self) -> Hls {
        let unit: Srgb<f64> = Srgb::<u8>::from(self).into_format();
        Hls::from_unit_rgb([unit.red, unit.green, unit.blue])
    }

    /// Convert from HLS, truncating each channel to 8 bits
    pub fn from_hls(hls: Hls) -> Self {
        let hsl = SrgbHsl::new(hls.hue * 360.0, hls.saturation, hls.lightness);
        let rgb: Srgb<f64> = hsl.into_color();
        Self::new(to_channel(rgb.red), to_channel(rgb.green), to_channel(rgb.blue))
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Hls {
    /// Convert channels already scaled to `[0, 1]`
    pub fn from_unit_rgb([r, g, b]: [f64; 3]) -> Self {
        let hsl: SrgbHsl = Srgb::<f64>::new(r, g, b).into_color();
        Self {
            hue: (hsl.hue.into_positive_degrees() / 360.0).rem_euclid(1.0),
            lightness: hsl.lightness,
            saturation: hsl.saturation,
        }
    }

    /// Hue in degrees
    pub const fn hue_degrees(self) -> f64 {
        self.hue * 360.0
    }
}

const fn to_channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0) as u8
}
