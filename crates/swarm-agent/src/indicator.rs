//! The visible status color — the one externally observable readout of an
//! agent's internal belief.

/// An RGB triple with components in `[0, 1]`, handed to the external
/// color-indicator setter each tick.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Boot color before any evidence exists.
    pub const NEUTRAL: Rgb = Rgb { r: 0.5, g: 0.5, b: 0.5 };

    /// Committed to "dark".
    pub const DECIDED_DARK: Rgb = Rgb { r: 1.0, g: 0.0, b: 0.0 };

    /// Committed to "light".
    pub const DECIDED_LIGHT: Rgb = Rgb { r: 0.0, g: 1.0, b: 0.0 };

    /// Continuous confidence readout while undecided: red grows with the
    /// posterior mass below one half, green with the mass above, on a dim
    /// blue base so an undecided agent never matches a decided color.
    pub fn confidence_blend(p_below_half: f64) -> Rgb {
        let p = p_below_half.clamp(0.0, 1.0) as f32;
        Rgb {
            r: p * 0.8,
            g: (1.0 - p) * 0.8,
            b: 0.4,
        }
    }
}
