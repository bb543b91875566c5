use std::fmt;

use rand::Rng;
use serde::{Serialize, Serializer};

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Draw a random color blended toward white by `pastel_factor`.
///
/// Each channel is `255 * (raw + p) / (1 + p)` for a uniform `raw` in [0, 1),
/// truncated to an integer.
pub fn random_color<R: Rng>(rng: &mut R, pastel_factor: f64) -> Color {
    let mut channel = || {
        let raw: f64 = rng.gen();
        (255.0 * (raw + pastel_factor) / (1.0 + pastel_factor)).clamp(0.0, 255.0) as u8
    };
    let r = channel();
    let g = channel();
    let b = channel();
    Color::new(r, g, b)
}

/// L1 (Manhattan) distance between two colors in channel space.
pub fn color_distance(a: Color, b: Color) -> u32 {
    a.channels()
        .iter()
        .zip(b.channels())
        .map(|(&x, y)| x.abs_diff(y) as u32)
        .sum()
}

/// Maximin palette generator: each new color is the best of a fixed number of
/// random draws, scored by its distance to the closest existing color.
#[derive(Debug, Clone, Copy)]
pub struct ColorGenerator {
    /// Blend toward white (0.0 = fully saturated range, higher = softer)
    pub pastel_factor: f64,
    /// Random candidates drawn per color; 0 behaves like 1
    pub max_draws: usize,
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self {
            pastel_factor: 0.5,
            max_draws: 100,
        }
    }
}

impl ColorGenerator {
    pub fn new(pastel_factor: f64, max_draws: usize) -> Self {
        Self {
            pastel_factor,
            max_draws,
        }
    }

    /// Pick the next color for a palette that already holds `existing`.
    ///
    /// With an empty palette the first draw is returned as-is.
    pub fn next<R: Rng>(&self, existing: &[Color], rng: &mut R) -> Color {
        let first = random_color(rng, self.pastel_factor);
        if existing.is_empty() {
            return first;
        }

        let mut best = first;
        let mut best_distance = min_distance(first, existing);
        for _ in 1..self.max_draws.max(1) {
            let candidate = random_color(rng, self.pastel_factor);
            let distance = min_distance(candidate, existing);
            if distance > best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        best
    }

    /// Generate `n` colors, threading the growing palette through [`Self::next`].
    pub fn generate_palette<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Color> {
        let mut palette = Vec::with_capacity(n);
        for _ in 0..n {
            let color = self.next(&palette, rng);
            palette.push(color);
        }
        palette
    }
}

fn min_distance(color: Color, existing: &[Color]) -> u32 {
    existing
        .iter()
        .map(|&c| color_distance(color, c))
        .min()
        .unwrap_or(u32::MAX)
}
