//! This module defines the core types used in the elemtab library for representing element records.
//!
//! It includes the `Rgb` struct for normalized display colors and the `ElementRecord` struct that
//! groups every per-element property into a single value, so the symbol, radius, color, and energy
//! coefficients of one element can never drift apart the way parallel arrays can.

use serde::Deserialize;

/// A normalized RGB color used to draw an element.
///
/// Each channel is a value in `[0, 1]`. The color is a display property chosen for contrast in the
/// viewer, not a physically meaningful quantity.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 3]")]
pub struct Rgb {
    /// The red channel in `[0, 1]`.
    pub r: f64,
    /// The green channel in `[0, 1]`.
    pub g: f64,
    /// The blue channel in `[0, 1]`.
    pub b: f64,
}

impl Rgb {
    /// Returns the three channels as an array in `[r, g, b]` order.
    #[inline(always)]
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(channels: [f64; 3]) -> Self {
        Rgb {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        }
    }
}

/// The display properties of a single element, one table row.
///
/// Records are stored in atomic-number order, with index 0 reserved for the placeholder entry
/// (`"x "`) used when an atom's element is unknown. All fields are plain data; the record carries
/// no behavior beyond what the table accessors expose.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementRecord {
    /// The two-character lowercase element symbol.
    ///
    /// One-letter symbols are padded with a trailing space (`"h "`, `"c "`), so the field is
    /// always exactly two characters. Symbols past index ~90 keep the source data's own
    /// (non-IUPAC) names, such as `"lw"` at index 103.
    pub symbol: String,
    /// The visualization radius used to size the element's sphere.
    ///
    /// This is a display tuning value, not a calibrated atomic radius. Always positive.
    #[serde(rename = "radius")]
    pub display_radius: f64,
    /// The normalized RGB color the element is drawn with.
    pub color: Rgb,
    /// Three positive bonding/energy coefficients consumed by the force calculation.
    pub energy: [f64; 3],
}
