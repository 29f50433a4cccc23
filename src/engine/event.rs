//! Engine change notifications.
//!
//! Every mutating command records the aspects of the state it touched. The
//! presentation layer drains the queue after each command and refreshes
//! whatever the events name; there is no payload beyond "changed".

/// A fire-and-forget notification raised by a mutating command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game was set up.
    GameStarted,
    /// The stage moved between placing, connecting and game over.
    StageChanged,
    /// The turn passed to another player.
    CurrentPlayerChanged,
    /// The round counter ticked down.
    TurnsLeftChanged,
    /// Pending chains were created, extended or finalized.
    ChainsChanged,
    /// At least one score changed after a capture.
    PlayerScoresChanged,
    /// The player roster was renamed.
    PlayerNamesChanged,
    /// A turn ended and pending chains were discarded.
    TurnEnded,
}
