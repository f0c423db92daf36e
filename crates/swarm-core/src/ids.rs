//! Strongly typed identifier wrappers.
//!
//! Two identities exist for one agent: [`AgentId`] is the simulation-side
//! index into SoA `Vec`s (dense, starts at 0, `u32::MAX` sentinel), while
//! [`PeerId`] is the identity an agent broadcasts on the wire (16-bit,
//! non-zero; **zero** is the empty-slot sentinel in the neighbor table).
//! The two use different sentinels on purpose — a wire frame must never be
//! able to spell "empty slot".

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in SoA storage.  Max ~4.3 billion agents.
    pub struct AgentId(u32);
}

// ── PeerId ────────────────────────────────────────────────────────────────────

/// The 16-bit identity an agent stamps on every outbound frame.
///
/// Zero is reserved: the neighbor table uses `PeerId::NONE` to mark an empty
/// slot, so valid wire identities are `1..=u16::MAX`.  Sixteen bits keeps the
/// space non-trivial at swarm scale while fitting the fixed-width frame.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerId(pub u16);

impl PeerId {
    /// The empty-slot sentinel.  Never valid on the wire.
    pub const NONE: PeerId = PeerId(0);

    /// `true` for the sentinel value.
    #[inline(always)]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Derive the wire identity for a simulation agent: `index + 1`, so that
    /// agent 0 never collides with the empty-slot sentinel.
    #[inline]
    pub fn from_agent(agent: AgentId) -> PeerId {
        PeerId((agent.0 + 1) as u16)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerId({})", self.0)
    }
}
