//! Full-step commutation table.
//!
//! Four phase states, each mapping to a fixed A/B/C/D drive pattern. A
//! step moves exactly one state forward or backward, wrapping modulo 4.
//!
//! | state | A | B | C | D |
//! |-------|---|---|---|---|
//! | 0     | H | L | H | L |
//! | 1     | L | H | H | L |
//! | 2     | L | H | L | H |
//! | 3     | H | L | L | H |

use embedded_hal::digital::PinState;

use super::Direction;

/// Logic levels for phase pins A, B, C, D (in that order).
pub type PhasePattern = [PinState; 4];

const H: PinState = PinState::High;
const L: PinState = PinState::Low;

/// Drive pattern per phase state, indexed by [`PhaseState::index`].
pub const COMMUTATION: [PhasePattern; 4] = [
    [H, L, H, L],
    [L, H, H, L],
    [L, H, L, H],
    [H, L, L, H],
];

/// Number of phase states in one electrical cycle.
pub const PHASE_STATES: u8 = COMMUTATION.len() as u8;

/// Position within the commutation cycle, always in `0..4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseState(u8);

impl PhaseState {
    /// Phase state 0, driven at construction.
    pub const INITIAL: PhaseState = PhaseState(0);

    /// Create a phase state from a raw index.
    ///
    /// Returns `None` for indices outside `0..4`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < PHASE_STATES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Raw index into [`COMMUTATION`].
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The neighbouring state in `direction`.
    #[inline]
    pub fn advance(self, direction: Direction) -> Self {
        let next = match direction {
            Direction::Forward => (self.0 + 1) % PHASE_STATES,
            Direction::Backward => (self.0 + PHASE_STATES - 1) % PHASE_STATES,
        };
        Self(next)
    }

    /// Drive pattern for this state.
    ///
    /// # Panics
    ///
    /// Panics if the state lies outside the table. Every constructor keeps
    /// the index in range, so reaching that branch means the engine's own
    /// bookkeeping is corrupt.
    #[inline]
    pub fn pattern(self) -> PhasePattern {
        match COMMUTATION.get(usize::from(self.0)) {
            Some(pattern) => *pattern,
            None => unreachable!("phase state {} outside commutation table", self.0),
        }
    }
}
