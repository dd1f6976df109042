//! Linear-light RGBA colors.

use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// Linear RGBA color with `f64` channels.
///
/// Channels are nominally in `[0, 1]` but are deliberately left unclamped
/// while layers are composed; only [`Color::to_rgba8`] clamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Fully transparent black. Starting value for rays that miss the planet.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from its four channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channels (0 → 0.0, 255 → 1.0).
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Multiply every channel, alpha included, by `s`.
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.r * s, self.g * s, self.b * s, self.a * s)
    }

    /// Component-wise product.
    pub fn modulate(self, other: Color) -> Self {
        Self::new(
            self.r * other.r,
            self.g * other.g,
            self.b * other.b,
            self.a * other.a,
        )
    }

    /// Linear interpolation `self * (1 - t) + other * t` on all four channels.
    pub fn mix(self, other: Color, t: f64) -> Self {
        Self::new(
            self.r * (1.0 - t) + other.r * t,
            self.g * (1.0 - t) + other.g * t,
            self.b * (1.0 - t) + other.b * t,
            self.a * (1.0 - t) + other.a * t,
        )
    }

    /// Same color with a replaced alpha channel.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Mean of the RGB channels.
    pub fn brightness(self) -> f64 {
        (self.r + self.g + self.b) / 3.0
    }

    /// Scale each RGB channel's deviation from the channel mean by `factor`.
    /// Alpha is left untouched; `factor == 1` is the identity.
    pub fn boost_saturation(self, factor: f64) -> Self {
        let avg = self.brightness();
        Self::new(
            avg + (self.r - avg) * factor,
            avg + (self.g - avg) * factor,
            avg + (self.b - avg) * factor,
            self.a,
        )
    }

    /// Composite over opaque black: premultiply RGB by alpha, result is opaque.
    pub fn composite_over_black(self) -> Self {
        Self::new(self.r * self.a, self.g * self.a, self.b * self.a, 1.0)
    }

    /// Convert to 8-bit RGBA: clamp to `[0, 1]`, scale by 255 and truncate.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            to_u8(self.a),
        ]
    }
}

/// Truncating conversion; NaN maps to 0.
fn to_u8(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (255.0 * channel.clamp(0.0, 1.0)) as u8
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        self.scale(rhs)
    }
}

impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.modulate(rhs)
    }
}
