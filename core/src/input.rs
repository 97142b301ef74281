use serde::{Deserialize, Serialize};

/// Pointer buttons the host forwards to the board.
///
/// Primary reveals the target cell, secondary toggles its flag. The host
/// decides which physical buttons map here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Key presses as the core understands them.
///
/// Only one key is meaningful: the one the host maps to "restart". Every
/// other key collapses to `Other`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyPress {
    Restart,
    Other,
}

/// What the host should do after forwarding a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeySignal {
    /// Nothing happened; the game is still running or the key is unmapped.
    Ignored,
    /// The board was rebuilt, render a fresh grid.
    Restarted,
    /// The player declined the restart prompt; session teardown is the
    /// host's job.
    Exit,
}
