#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use input::*;
pub use palette::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod input;
mod palette;
mod types;

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of a reveal action.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Outcome of a dispatched pointer event, tagged by the action it ran.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputOutcome {
    Reveal(RevealOutcome),
    Flag(FlagOutcome),
}

impl InputOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Flag(outcome) => outcome.has_update(),
        }
    }
}
