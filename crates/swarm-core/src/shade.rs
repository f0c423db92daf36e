//! The two classification enums shared across the framework.
//!
//! [`Shade`] is the binary evidence unit the Bayesian model accumulates and
//! the codec puts on the wire; [`LightLevel`] is the ternary reading a raw
//! sensor magnitude classifies into, where the middle band produces no
//! evidence at all.

use std::fmt;

// ── Shade ─────────────────────────────────────────────────────────────────────

/// A single binary observation: the environmental feature looked dark or
/// looked light.  This is the unit of evidence — self-sensed or peer-reported.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shade {
    Dark,
    Light,
}

impl Shade {
    /// Wire encoding: dark = 0, light = 1.
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Shade::Dark => 0,
            Shade::Light => 1,
        }
    }

    /// Decode a wire bit.  Any non-zero value reads as light, mirroring the
    /// encoder's single-bit contract.
    #[inline]
    pub fn from_bit(bit: u8) -> Shade {
        if bit == 0 { Shade::Dark } else { Shade::Light }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shade::Dark => write!(f, "dark"),
            Shade::Light => write!(f, "light"),
        }
    }
}

// ── LightLevel ────────────────────────────────────────────────────────────────

/// Ternary classification of an instantaneous sensor magnitude.
///
/// `Gray` is the ambiguous middle band: it never becomes evidence, and it
/// doubles as the boundary-crossing signal for the locomotion state machine
/// (the arena's gray margin surrounds the black/white feature area).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightLevel {
    Dark,
    Gray,
    Light,
}

impl LightLevel {
    /// Collapse to a binary observation; `None` for the ambiguous band.
    #[inline]
    pub fn shade(self) -> Option<Shade> {
        match self {
            LightLevel::Dark => Some(Shade::Dark),
            LightLevel::Gray => None,
            LightLevel::Light => Some(Shade::Light),
        }
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightLevel::Dark => write!(f, "dark"),
            LightLevel::Gray => write!(f, "gray"),
            LightLevel::Light => write!(f, "light"),
        }
    }
}
